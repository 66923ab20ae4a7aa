//! Coordinator side of the distributed policies.
//!
//! The coordinator accepts a fixed number of workers, hands each its rank and
//! a copy of the graph, and then either computes its own planner range
//! alongside the workers (static) or serves batches from a task cursor
//! without computing (dynamic). Either way it finishes by summing every
//! partial vector, in rank order, into the final result.
//!
//! There is no timeout handling: a worker that hangs before sending its
//! partial vector stalls collection indefinitely.

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};

use betwixt_common::{Error, NodeId, Result};
use betwixt_core::brandes::{self, BrandesScratch};
use betwixt_core::io::EdgeList;
use betwixt_core::{partition, reduce};
use crossbeam::channel;
use tracing::{debug, info};

use crate::protocol::{Message, Policy};
use crate::transport::Connection;

/// Configuration for a coordinator run.
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Number of remote workers to wait for.
    pub workers: usize,
    /// Distribution policy for the run.
    pub policy: Policy,
}

/// Runs the coordinator until every partial result is collected.
///
/// Accepts exactly `config.workers` connections on `listener`, executes the
/// configured policy, and returns the reduced, halved centrality vector.
pub fn run_coordinator(
    listener: &TcpListener,
    edge_list: &EdgeList,
    config: &CoordinatorConfig,
) -> Result<Vec<f64>> {
    if config.workers == 0 {
        return Err(Error::Protocol(
            "at least one remote worker is required".into(),
        ));
    }
    if let Policy::Dynamic { batch_size: 0 } = config.policy {
        return Err(Error::Protocol("batch size must be at least 1".into()));
    }

    info!(workers = config.workers, policy = ?config.policy, "waiting for workers");
    let mut connections = accept_workers(listener, config.workers)?;

    match config.policy {
        Policy::Static => run_static(&mut connections, edge_list),
        Policy::Dynamic { batch_size } => run_dynamic(connections, edge_list, batch_size),
    }
}

fn accept_workers(listener: &TcpListener, workers: usize) -> Result<Vec<Connection>> {
    let mut connections = Vec::with_capacity(workers);
    for worker in 1..=workers {
        let (stream, peer) = listener.accept()?;
        debug!(worker, %peer, "worker connected");
        connections.push(Connection::from_stream(stream)?);
    }
    Ok(connections)
}

/// Static policy: the coordinator is rank 0 and computes the first planner
/// range while every remote worker computes its own.
fn run_static(connections: &mut [Connection], edge_list: &EdgeList) -> Result<Vec<f64>> {
    let nodes = edge_list.nodes;
    let participants = connections.len() + 1;

    for (index, connection) in connections.iter_mut().enumerate() {
        connection.send(&Message::Setup {
            worker: index + 1,
            workers: participants,
            policy: Policy::Static,
        })?;
        connection.send(&Message::Graph {
            nodes,
            edges: edge_list.edges.clone(),
        })?;
    }

    let graph = edge_list.build_graph();
    let own_range = partition::plan(nodes, participants)[0].clone();
    debug!(start = own_range.start, end = own_range.end, "coordinator range");

    let mut totals = vec![0.0; nodes];
    let mut scratch = BrandesScratch::new(nodes);
    brandes::accumulate_range(&graph, own_range, &mut scratch, &mut totals);

    for (index, connection) in connections.iter_mut().enumerate() {
        let values = expect_partial(connection.recv()?, index + 1, nodes)?;
        reduce::combine(&mut totals, &values);
    }

    reduce::finalize(&mut totals);
    Ok(totals)
}

/// Dynamic policy: one handler thread per connection serves batches off a
/// shared cursor; the coordinator itself does not compute.
fn run_dynamic(
    connections: Vec<Connection>,
    edge_list: &EdgeList,
    batch_size: usize,
) -> Result<Vec<f64>> {
    let nodes = edge_list.nodes;
    let workers = connections.len();
    let cursor = AtomicUsize::new(0);
    let (partial_tx, partial_rx) = channel::bounded(workers);

    std::thread::scope(|scope| {
        for (index, mut connection) in connections.into_iter().enumerate() {
            let worker = index + 1;
            let cursor = &cursor;
            let partial_tx = partial_tx.clone();
            let edges = edge_list.edges.clone();
            scope.spawn(move || {
                let outcome = serve_worker(
                    &mut connection,
                    worker,
                    workers,
                    nodes,
                    edges,
                    batch_size,
                    cursor,
                );
                let _ = partial_tx.send((worker, outcome));
            });
        }
        drop(partial_tx);

        // Collect keyed by rank so the reduction order is stable no matter
        // which worker finishes first.
        let mut partials: Vec<Option<Vec<f64>>> = vec![None; workers];
        for _ in 0..workers {
            let (worker, outcome) = partial_rx
                .recv()
                .map_err(|_| Error::Protocol("worker handler exited without a result".into()))?;
            partials[worker - 1] = Some(outcome?);
            debug!(worker, "partial collected");
        }

        let mut totals = vec![0.0; nodes];
        for partial in partials.into_iter().flatten() {
            reduce::combine(&mut totals, &partial);
        }
        reduce::finalize(&mut totals);
        Ok(totals)
    })
}

/// Serves one worker: setup, graph, then the batch request loop until the
/// cursor runs dry and the worker hands back its partial vector.
fn serve_worker(
    connection: &mut Connection,
    worker: usize,
    workers: usize,
    nodes: usize,
    edges: Vec<(NodeId, NodeId)>,
    batch_size: usize,
    cursor: &AtomicUsize,
) -> Result<Vec<f64>> {
    connection.send(&Message::Setup {
        worker,
        workers,
        policy: Policy::Dynamic { batch_size },
    })?;
    connection.send(&Message::Graph { nodes, edges })?;

    loop {
        match connection.recv()? {
            Message::Ready { .. } => {
                let start = cursor.fetch_add(batch_size, Ordering::Relaxed);
                if start >= nodes {
                    connection.send(&Message::NoMoreWork)?;
                } else {
                    debug!(worker, start, "batch dispatched");
                    connection.send(&Message::Batch { start })?;
                }
            }
            message => return expect_partial(message, worker, nodes),
        }
    }
}

fn expect_partial(message: Message, worker: usize, nodes: usize) -> Result<Vec<f64>> {
    match message {
        Message::Partial { values } if values.len() == nodes => Ok(values),
        Message::Partial { values } => Err(Error::Protocol(format!(
            "worker {worker} sent a partial vector of length {}, expected {nodes}",
            values.len()
        ))),
        other => Err(Error::Protocol(format!(
            "expected partial result from worker {worker}, got {other:?}"
        ))),
    }
}
