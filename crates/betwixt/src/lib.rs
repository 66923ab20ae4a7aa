//! # Betwixt
//!
//! Parallel and distributed betweenness centrality for sparse undirected
//! graphs, using Brandes' algorithm.
//!
//! Start with [`AdjacencyGraph`] and [`compute_local`] for in-process use:
//!
//! ```rust
//! use betwixt::{AdjacencyGraph, compute_local};
//!
//! let mut graph = AdjacencyGraph::with_capacity(3, 2);
//! graph.add_edge(0, 1);
//! graph.add_edge(1, 2);
//!
//! let centrality = compute_local(&graph, 2);
//! assert_eq!(centrality, vec![0.0, 1.0, 0.0]);
//! ```
//!
//! Distributed runs pair [`run_coordinator`] with [`run_worker`] across
//! processes; the `betwixt` binary shows the full wiring.

// Re-export the engine API
pub use betwixt_engine::{
    CoordinatorConfig, DEFAULT_BATCH_SIZE, Message, Policy, compute_local, run_coordinator,
    run_worker,
};

// Re-export core types - you'll need these for building and loading graphs
pub use betwixt_core::{AdjacencyGraph, BrandesScratch, EdgeList};
pub use betwixt_common::{Error, NodeId, Result};
