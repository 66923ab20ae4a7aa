//! Wire messages exchanged between the coordinator and remote workers.
//!
//! The exchange is deliberately small: a setup pair sent once per worker at
//! startup, the pull-based batch loop for the dynamic policy, and exactly one
//! partial-result message per worker at the end. There are no retries and no
//! acknowledgements beyond normal delivery.

use betwixt_common::NodeId;
use serde::{Deserialize, Serialize};

/// Default number of sources dispatched per dynamic batch.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Which distribution policy a run follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// One fixed planner range per participant; the coordinator computes
    /// alongside the workers.
    Static,
    /// Pull-based batches from the coordinator's task cursor; the
    /// coordinator only dispatches.
    Dynamic {
        /// Number of sources per batch.
        batch_size: usize,
    },
}

/// A message on the coordinator/worker wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Message {
    /// Coordinator to worker: rank and policy, sent once before anything
    /// else.
    Setup {
        /// This worker's rank. Rank 0 is the coordinator itself under the
        /// static policy.
        worker: usize,
        /// Total number of computing participants.
        workers: usize,
        /// Distribution policy for the run.
        policy: Policy,
    },
    /// Coordinator to worker: the full graph, sent once after
    /// [`Message::Setup`].
    Graph {
        /// Node count.
        nodes: usize,
        /// Undirected edges, duplicates preserved.
        edges: Vec<(NodeId, NodeId)>,
    },
    /// Worker to coordinator: ready for the next dynamic batch.
    Ready {
        /// Rank of the requesting worker.
        worker: usize,
    },
    /// Coordinator to worker: the next unclaimed batch starts here.
    Batch {
        /// First source index of the batch.
        start: usize,
    },
    /// Coordinator to worker: the task cursor is exhausted; send results and
    /// terminate.
    NoMoreWork,
    /// Worker to coordinator: the worker's whole partial centrality vector,
    /// sent exactly once before terminating.
    Partial {
        /// Per-node partial centrality values.
        values: Vec<f64>,
    },
}
