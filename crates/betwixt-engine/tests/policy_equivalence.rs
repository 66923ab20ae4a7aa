//! End-to-end equivalence of the three distribution policies.
//!
//! The distributed runs are exercised for real: workers are spawned as
//! threads that connect to the coordinator over loopback TCP and speak the
//! full wire protocol.

use std::net::TcpListener;
use std::thread;

use betwixt_core::io::EdgeList;
use betwixt_engine::coordinator::{CoordinatorConfig, run_coordinator};
use betwixt_engine::local::compute_local;
use betwixt_engine::protocol::Policy;
use betwixt_engine::worker::run_worker;

/// A graph with deliberately uneven per-source cost: a clique, a bridge
/// path, a hub, and a disconnected component.
fn fixture() -> EdgeList {
    let mut edges = Vec::new();
    // Clique over 0..5.
    for u in 0..5 {
        for v in (u + 1)..5 {
            edges.push((u, v));
        }
    }
    // Bridge path 4-5-6-7.
    edges.extend([(4, 5), (5, 6), (6, 7)]);
    // Hub 8 with leaves 9..14, attached to the path.
    edges.push((7, 8));
    for leaf in 9..14 {
        edges.push((8, leaf));
    }
    // Disconnected triangle 14-15-16; nodes 17..20 are isolated.
    edges.extend([(14, 15), (15, 16), (16, 14)]);
    EdgeList { nodes: 20, edges }
}

fn run_distributed(edge_list: &EdgeList, workers: usize, policy: Policy) -> Vec<f64> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    let handles: Vec<_> = (0..workers)
        .map(|_| thread::spawn(move || run_worker(addr)))
        .collect();

    let config = CoordinatorConfig { workers, policy };
    let totals = run_coordinator(&listener, edge_list, &config).expect("coordinator run");

    for handle in handles {
        handle.join().expect("worker thread").expect("worker run");
    }
    totals
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (node, (a, e)) in actual.iter().zip(expected).enumerate() {
        let tolerance = 1e-9 * e.abs().max(1.0);
        assert!(
            (a - e).abs() <= tolerance,
            "node {node}: got {a}, expected {e}"
        );
    }
}

#[test]
fn local_thread_counts_agree() {
    let graph = fixture().build_graph();
    let serial = compute_local(&graph, 1);

    for threads in [2, 3, 7] {
        assert_close(&compute_local(&graph, threads), &serial);
    }
}

#[test]
fn static_distributed_matches_local() {
    let edge_list = fixture();
    let serial = compute_local(&edge_list.build_graph(), 1);

    for workers in [1, 2, 4] {
        let totals = run_distributed(&edge_list, workers, Policy::Static);
        assert_close(&totals, &serial);
    }
}

#[test]
fn dynamic_distributed_matches_local() {
    let edge_list = fixture();
    let serial = compute_local(&edge_list.build_graph(), 1);

    // A batch size smaller than the node count forces several request
    // round-trips per worker.
    for workers in [1, 3] {
        let totals = run_distributed(&edge_list, workers, Policy::Dynamic { batch_size: 4 });
        assert_close(&totals, &serial);
    }
}

#[test]
fn dynamic_with_oversized_batches_still_covers_every_source() {
    let edge_list = fixture();
    let serial = compute_local(&edge_list.build_graph(), 1);

    let totals = run_distributed(&edge_list, 2, Policy::Dynamic { batch_size: 1000 });
    assert_close(&totals, &serial);
}

#[test]
fn distributed_empty_graph_yields_empty_result() {
    let edge_list = EdgeList {
        nodes: 0,
        edges: Vec::new(),
    };

    let totals = run_distributed(&edge_list, 2, Policy::Dynamic { batch_size: 4 });
    assert!(totals.is_empty());
}

#[test]
fn coordinator_rejects_zero_workers() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let config = CoordinatorConfig {
        workers: 0,
        policy: Policy::Static,
    };

    assert!(run_coordinator(&listener, &fixture(), &config).is_err());
}

#[test]
fn coordinator_rejects_zero_batch_size() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let config = CoordinatorConfig {
        workers: 1,
        policy: Policy::Dynamic { batch_size: 0 },
    };

    assert!(run_coordinator(&listener, &fixture(), &config).is_err());
}
