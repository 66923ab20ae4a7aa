//! Core type definitions for Betwixt.

/// Index of a node in a graph.
///
/// Nodes are dense indices `0..n`, assigned at load time; every per-node
/// buffer in the workspace (distances, path counts, centrality values) is
/// indexed directly by `NodeId`.
pub type NodeId = usize;
