//! Remote worker loop.
//!
//! A worker connects, learns its rank and policy, receives the graph, and
//! then either computes one fixed planner range (static) or pulls batches
//! until the coordinator runs out (dynamic). Either way it sends its partial
//! vector exactly once and returns.

use std::net::ToSocketAddrs;

use betwixt_common::{Error, Result};
use betwixt_core::brandes::{self, BrandesScratch};
use betwixt_core::graph::AdjacencyGraph;
use betwixt_core::partition;
use tracing::{debug, info};

use crate::protocol::{Message, Policy};
use crate::transport::Connection;

/// Connects to the coordinator at `addr` and serves until the work is done.
pub fn run_worker<A: ToSocketAddrs>(addr: A) -> Result<()> {
    let mut connection = Connection::connect(addr)?;

    let (worker, workers, policy) = match connection.recv()? {
        Message::Setup {
            worker,
            workers,
            policy,
        } => (worker, workers, policy),
        other => return Err(Error::Protocol(format!("expected setup, got {other:?}"))),
    };
    let graph = match connection.recv()? {
        Message::Graph { nodes, edges } => {
            // Same validation as load time: never index past the node count.
            for &(u, v) in &edges {
                for endpoint in [u, v] {
                    if endpoint >= nodes {
                        return Err(Error::NodeOutOfRange {
                            index: endpoint,
                            nodes,
                        });
                    }
                }
            }
            AdjacencyGraph::from_edges(nodes, &edges)
        }
        other => return Err(Error::Protocol(format!("expected graph, got {other:?}"))),
    };
    let nodes = graph.node_count();
    info!(worker, workers, policy = ?policy, nodes, "worker initialized");

    let mut scratch = BrandesScratch::new(nodes);
    let mut centrality = vec![0.0; nodes];

    match policy {
        Policy::Static => {
            if worker >= workers {
                return Err(Error::Protocol(format!(
                    "rank {worker} out of range for {workers} participants"
                )));
            }
            let sources = partition::plan(nodes, workers)[worker].clone();
            debug!(worker, start = sources.start, end = sources.end, "range assigned");
            brandes::accumulate_range(&graph, sources, &mut scratch, &mut centrality);
        }
        Policy::Dynamic { batch_size } => loop {
            connection.send(&Message::Ready { worker })?;
            match connection.recv()? {
                Message::Batch { start } => {
                    // The last batch may be short.
                    let end = (start + batch_size).min(nodes);
                    debug!(worker, start, end, "batch received");
                    brandes::accumulate_range(&graph, start..end, &mut scratch, &mut centrality);
                }
                Message::NoMoreWork => break,
                other => {
                    return Err(Error::Protocol(format!(
                        "expected batch assignment, got {other:?}"
                    )));
                }
            }
        },
    }

    connection.send(&Message::Partial { values: centrality })?;
    Ok(())
}
