//! Static-local distribution: a fixed pool of scoped threads.
//!
//! Each thread owns one contiguous planner range, private scratch buffers,
//! and a private accumulator, so the hot loop runs without synchronization;
//! the only barrier is the scope join before reduction.

use betwixt_core::brandes::{self, BrandesScratch};
use betwixt_core::graph::AdjacencyGraph;
use betwixt_core::{partition, reduce};
use tracing::debug;

/// Computes the full centrality vector using `threads` worker threads.
///
/// With one thread this degenerates to the serial algorithm. The returned
/// vector is already reduced and halved.
///
/// # Panics
///
/// Panics if `threads` is zero or a worker thread panics.
#[must_use]
pub fn compute_local(graph: &AdjacencyGraph, threads: usize) -> Vec<f64> {
    let nodes = graph.node_count();
    let ranges = partition::plan(nodes, threads);

    let partials: Vec<Vec<f64>> = std::thread::scope(|scope| {
        let handles: Vec<_> = ranges
            .into_iter()
            .enumerate()
            .map(|(worker, sources)| {
                scope.spawn(move || {
                    debug!(worker, start = sources.start, end = sources.end, "range assigned");
                    let mut scratch = BrandesScratch::new(nodes);
                    let mut centrality = vec![0.0; nodes];
                    brandes::accumulate_range(graph, sources, &mut scratch, &mut centrality);
                    centrality
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker thread panicked"))
            .collect()
    });

    let mut totals = reduce::sum(&partials, nodes);
    reduce::finalize(&mut totals);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(nodes: usize) -> AdjacencyGraph {
        let edges: Vec<_> = (1..nodes).map(|v| (v - 1, v)).collect();
        AdjacencyGraph::from_edges(nodes, &edges)
    }

    #[test]
    fn single_thread_matches_reference_values() {
        assert_eq!(
            compute_local(&path_graph(5), 1),
            vec![0.0, 3.0, 4.0, 3.0, 0.0]
        );
    }

    #[test]
    fn thread_count_does_not_change_the_result() {
        let graph = path_graph(17);
        let serial = compute_local(&graph, 1);

        for threads in [2, 3, 8, 32] {
            assert_eq!(compute_local(&graph, threads), serial, "threads={threads}");
        }
    }

    #[test]
    fn empty_graph_yields_empty_result() {
        let graph = AdjacencyGraph::with_capacity(0, 0);
        assert!(compute_local(&graph, 4).is_empty());
    }

    #[test]
    fn repeated_runs_are_bitwise_identical() {
        let graph = path_graph(23);
        let first = compute_local(&graph, 3);
        let second = compute_local(&graph, 3);
        assert_eq!(first, second);
    }
}
