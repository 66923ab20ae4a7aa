//! # betwixt-engine
//!
//! Work distribution for Betwixt: the shared-memory thread pool and the
//! distributed coordinator/worker pair. All three policies consume the same
//! graph and produce the same reduced, halved centrality vector; they differ
//! only in how source nodes are handed to workers.
//!
//! ## Modules
//!
//! - [`local`] - Static-local policy: scoped threads over planner ranges
//! - [`protocol`] - Wire messages exchanged between coordinator and workers
//! - [`transport`] - Length-prefixed bincode framing over TCP
//! - [`coordinator`] - Coordinator side of both distributed policies
//! - [`worker`] - Remote worker loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coordinator;
pub mod local;
pub mod protocol;
pub mod transport;
pub mod worker;

pub use coordinator::{CoordinatorConfig, run_coordinator};
pub use local::compute_local;
pub use protocol::{DEFAULT_BATCH_SIZE, Message, Policy};
pub use worker::run_worker;
