//! Single-source Brandes pass: shortest-path counting and dependency
//! accumulation.
//!
//! One invocation scores the contribution of a single source node to every
//! other node's betweenness centrality. Both ordering invariants of the
//! algorithm live here: the BFS frontier is FIFO, so nodes finish in
//! nondecreasing distance order, and back-propagation walks that order in
//! reverse.
//!
//! Scratch state is owned by exactly one worker and reset between sources
//! rather than reallocated; it must never be shared across concurrently
//! executing sources.

use std::collections::VecDeque;
use std::ops::Range;

use betwixt_common::NodeId;

use crate::graph::AdjacencyGraph;

/// Reusable per-worker working state for the Brandes pass.
#[derive(Debug)]
pub struct BrandesScratch {
    /// Shortest-path counts from the current source.
    sigma: Vec<u64>,
    /// BFS distances from the current source; -1 marks unvisited.
    dist: Vec<i32>,
    /// Dependency accumulator for the current source.
    delta: Vec<f64>,
    /// Predecessors of each node along shortest paths from the source.
    predecessors: Vec<Vec<NodeId>>,
    /// Nodes in BFS completion order.
    visit_order: Vec<NodeId>,
    /// FIFO BFS frontier.
    frontier: VecDeque<NodeId>,
}

impl BrandesScratch {
    /// Allocates scratch buffers for a graph of `nodes` nodes.
    #[must_use]
    pub fn new(nodes: usize) -> Self {
        Self {
            sigma: vec![0; nodes],
            dist: vec![-1; nodes],
            delta: vec![0.0; nodes],
            predecessors: vec![Vec::new(); nodes],
            visit_order: Vec::with_capacity(nodes),
            frontier: VecDeque::new(),
        }
    }

    /// Resets every buffer for a new source.
    fn reset(&mut self, source: NodeId) {
        self.sigma.fill(0);
        self.dist.fill(-1);
        self.delta.fill(0.0);
        for preds in &mut self.predecessors {
            preds.clear();
        }
        self.visit_order.clear();
        self.frontier.clear();
        self.sigma[source] = 1;
        self.dist[source] = 0;
    }
}

/// Runs one Brandes pass from `source`, adding each node's dependency into
/// `centrality`.
///
/// `centrality` must hold one entry per node. The source itself receives no
/// contribution from its own pass, and nodes unreachable from `source` are
/// never visited.
pub fn accumulate_from_source(
    graph: &AdjacencyGraph,
    source: NodeId,
    scratch: &mut BrandesScratch,
    centrality: &mut [f64],
) {
    scratch.reset(source);
    scratch.frontier.push_back(source);

    // Forward phase: FIFO order keeps distances nondecreasing, which the
    // shortest-path counts rely on.
    while let Some(v) = scratch.frontier.pop_front() {
        scratch.visit_order.push(v);
        for &w in graph.neighbors(v) {
            if scratch.dist[w] < 0 {
                scratch.dist[w] = scratch.dist[v] + 1;
                scratch.frontier.push_back(w);
            }
            if scratch.dist[w] == scratch.dist[v] + 1 {
                scratch.sigma[w] += scratch.sigma[v];
                scratch.predecessors[w].push(v);
            }
        }
    }

    // Backward phase: reverse visit order is nonincreasing distance, so every
    // node's delta is complete before it is pushed to its predecessors.
    for &w in scratch.visit_order.iter().rev() {
        for &v in &scratch.predecessors[w] {
            // sigma[w] >= 1 for every visited node: it was reached through at
            // least one shortest path.
            scratch.delta[v] +=
                (scratch.sigma[v] as f64 / scratch.sigma[w] as f64) * (1.0 + scratch.delta[w]);
        }
        if w != source {
            centrality[w] += scratch.delta[w];
        }
    }
}

/// Runs the Brandes pass for every source in `sources`, reusing `scratch`.
pub fn accumulate_range(
    graph: &AdjacencyGraph,
    sources: Range<usize>,
    scratch: &mut BrandesScratch,
    centrality: &mut [f64],
) {
    for source in sources {
        accumulate_from_source(graph, source, scratch, centrality);
    }
}
