//! Adjacency-list storage for sparse undirected graphs.
//!
//! A dense adjacency matrix costs O(n²) memory and makes neighbor
//! enumeration O(n) per node, which is prohibitive for the sparse graphs this
//! crate targets; the store keeps one growable neighbor list per node
//! instead. Lists hold a few neighbors inline and spill to the heap past
//! that.
//!
//! Invariants:
//! - Edges are inserted symmetrically: `v` appears in `u`'s list iff `u`
//!   appears in `v`'s.
//! - Duplicate edges are kept as stored; neighbor enumeration visits them.
//! - The store is immutable once loaded and safe for unsynchronized
//!   concurrent reads.

use betwixt_common::NodeId;
use smallvec::SmallVec;

/// Inline neighbor capacity before a list spills to the heap.
const INLINE_DEGREE: usize = 4;

/// An undirected, unweighted graph over nodes `0..n`.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    /// Neighbor lists indexed by node.
    adjacency: Vec<SmallVec<[NodeId; INLINE_DEGREE]>>,
    /// Number of undirected edges inserted.
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Creates an empty graph with `nodes` nodes and room for
    /// `expected_edges` undirected edges.
    ///
    /// Each neighbor list is pre-sized for the average degree `2m / n` so
    /// that loading a degree-homogeneous graph does not reallocate.
    #[must_use]
    pub fn with_capacity(nodes: usize, expected_edges: usize) -> Self {
        let avg_degree = if nodes == 0 {
            0
        } else {
            (2 * expected_edges).div_ceil(nodes)
        };
        let mut adjacency = Vec::with_capacity(nodes);
        for _ in 0..nodes {
            adjacency.push(SmallVec::with_capacity(avg_degree.max(INLINE_DEGREE)));
        }
        Self {
            adjacency,
            edge_count: 0,
        }
    }

    /// Builds a graph from a validated edge list.
    #[must_use]
    pub fn from_edges(nodes: usize, edges: &[(NodeId, NodeId)]) -> Self {
        let mut graph = Self::with_capacity(nodes, edges.len());
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Inserts the undirected edge `(u, v)`, appending each endpoint to the
    /// other's neighbor list in O(1) amortized.
    ///
    /// Endpoints must be in range; this is a caller contract, checked only in
    /// debug builds.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        debug_assert!(u < self.adjacency.len() && v < self.adjacency.len());
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edge_count += 1;
    }

    /// Returns the neighbors of `u` without copying.
    #[must_use]
    pub fn neighbors(&self, u: NodeId) -> &[NodeId] {
        &self.adjacency[u]
    }

    /// Returns whether `(u, v)` was inserted, by scanning `u`'s list.
    ///
    /// O(degree(u)); the traversal hot path uses [`Self::neighbors`], not
    /// point queries.
    #[must_use]
    pub fn edge_exists(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency[u].contains(&v)
    }

    /// Returns the degree of `u`, counting duplicate edges.
    #[must_use]
    pub fn degree(&self, u: NodeId) -> usize {
        self.adjacency[u].len()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges inserted.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric() {
        let mut graph = AdjacencyGraph::with_capacity(4, 3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);

        for (u, v) in [(0, 1), (1, 2), (2, 3)] {
            assert!(graph.edge_exists(u, v));
            assert!(graph.edge_exists(v, u));
        }
        assert!(!graph.edge_exists(0, 2));
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut graph = AdjacencyGraph::with_capacity(2, 2);
        graph.add_edge(0, 1);
        graph.add_edge(0, 1);

        assert_eq!(graph.neighbors(0), &[1, 1]);
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn from_edges_builds_all_lists() {
        let graph = AdjacencyGraph::from_edges(5, &[(0, 1), (0, 2), (3, 4)]);

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert_eq!(graph.neighbors(4), &[3]);
    }

    #[test]
    fn empty_graph_has_no_nodes() {
        let graph = AdjacencyGraph::with_capacity(0, 0);

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn high_degree_list_grows_past_inline_capacity() {
        let mut graph = AdjacencyGraph::with_capacity(10, 2);
        for v in 1..10 {
            graph.add_edge(0, v);
        }

        assert_eq!(graph.degree(0), 9);
        assert_eq!(graph.neighbors(0), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
