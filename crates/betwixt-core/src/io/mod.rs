//! Text edge-list input and centrality output.
//!
//! Input format: a header `n m`, then `m` endpoint pairs `orig dest` with
//! zero-based indices, one undirected edge per pair. Any whitespace
//! separates tokens, duplicate edges are kept, and content past the `m`-th
//! edge is ignored. Output format: one value per line, six fractional
//! digits, line `i` holding the centrality of node `i`.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use betwixt_common::{Error, NodeId, Result};

use crate::graph::AdjacencyGraph;

/// A parsed edge-list file: node count plus validated endpoint pairs.
///
/// The flat pair list is kept alongside the built graph because the
/// distributed coordinator re-broadcasts exactly this to its workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Declared node count.
    pub nodes: usize,
    /// Validated edges in file order, duplicates preserved.
    pub edges: Vec<(NodeId, NodeId)>,
}

impl EdgeList {
    /// Builds the adjacency-list graph for this edge list.
    #[must_use]
    pub fn build_graph(&self) -> AdjacencyGraph {
        AdjacencyGraph::from_edges(self.nodes, &self.edges)
    }
}

/// Reads and validates an edge list from `reader`.
///
/// Fails fast on a malformed header, a truncated or malformed edge line, or
/// an endpoint outside `0..n` — before any computation starts.
pub fn read_edge_list<R: BufRead>(mut reader: R) -> Result<EdgeList> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let mut tokens = content.split_ascii_whitespace();

    let nodes = next_index(&mut tokens, "node count")?;
    let edge_count = next_index(&mut tokens, "edge count")?;

    let mut edges = Vec::with_capacity(edge_count);
    for edge in 0..edge_count {
        let u = next_index(&mut tokens, &format!("origin of edge {edge}"))?;
        let v = next_index(&mut tokens, &format!("destination of edge {edge}"))?;
        for endpoint in [u, v] {
            if endpoint >= nodes {
                return Err(Error::NodeOutOfRange {
                    index: endpoint,
                    nodes,
                });
            }
        }
        edges.push((u, v));
    }

    Ok(EdgeList { nodes, edges })
}

fn next_index<'a, I>(tokens: &mut I, what: &str) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| Error::Parse(format!("unexpected end of file reading {what}")))?;
    token
        .parse()
        .map_err(|_| Error::Parse(format!("invalid {what}: {token:?}")))
}

/// Writes one centrality value per line with six fractional digits.
pub fn write_centrality<W: Write>(mut writer: W, centrality: &[f64]) -> Result<()> {
    for value in centrality {
        writeln!(writer, "{value:.6}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Derives the output path: the input's extension replaced by `btw`, or
/// `.btw` appended when the input has none.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    let mut output = input.to_path_buf();
    output.set_extension("btw");
    output
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_a_well_formed_file() {
        let input = "4 3\n0 1\n1 2\n2 3\n";
        let edge_list = read_edge_list(Cursor::new(input)).unwrap();

        assert_eq!(edge_list.nodes, 4);
        assert_eq!(edge_list.edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn whitespace_layout_is_irrelevant() {
        let input = "3 2 0 1\t\t1    2";
        let edge_list = read_edge_list(Cursor::new(input)).unwrap();

        assert_eq!(edge_list.nodes, 3);
        assert_eq!(edge_list.edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn content_past_the_declared_edges_is_ignored() {
        let input = "2 1\n0 1\n0 1\n1 1\n";
        let edge_list = read_edge_list(Cursor::new(input)).unwrap();

        assert_eq!(edge_list.edges, vec![(0, 1)]);
    }

    #[test]
    fn rejects_a_non_numeric_header() {
        let err = read_edge_list(Cursor::new("four 3\n")).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "got {err:?}");
    }

    #[test]
    fn rejects_a_truncated_edge_list() {
        let err = read_edge_list(Cursor::new("3 2\n0 1\n")).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "got {err:?}");
    }

    #[test]
    fn rejects_an_out_of_range_endpoint() {
        let err = read_edge_list(Cursor::new("2 1\n0 7\n")).unwrap_err();
        assert!(
            matches!(err, Error::NodeOutOfRange { index: 7, nodes: 2 }),
            "got {err:?}"
        );
    }

    #[test]
    fn empty_graph_parses() {
        let edge_list = read_edge_list(Cursor::new("0 0\n")).unwrap();
        assert_eq!(edge_list.nodes, 0);
        assert!(edge_list.edges.is_empty());
    }

    #[test]
    fn writes_six_fractional_digits() {
        let mut out = Vec::new();
        write_centrality(&mut out, &[0.0, 3.5, 4.0]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0.000000\n3.500000\n4.000000\n"
        );
    }

    #[test]
    fn output_path_swaps_or_adds_the_extension() {
        assert_eq!(output_path(Path::new("graph.txt")), PathBuf::from("graph.btw"));
        assert_eq!(output_path(Path::new("graph")), PathBuf::from("graph.btw"));
        assert_eq!(
            output_path(Path::new("data/big.edges")),
            PathBuf::from("data/big.btw")
        );
    }

    #[test]
    fn round_trips_through_a_real_file() {
        use std::io::{BufReader, Write as _};

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3 2\n0 1\n1 2\n").unwrap();

        let reader = BufReader::new(std::fs::File::open(file.path()).unwrap());
        let edge_list = read_edge_list(reader).unwrap();
        let graph = edge_list.build_graph();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.neighbors(1), &[0, 2]);
    }
}
