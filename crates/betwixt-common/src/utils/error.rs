//! Error and result types used across the workspace.

use thiserror::Error;

/// Result alias using the shared [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by graph loading, computation, and coordination.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying I/O failure while reading input, writing results, or
    /// talking to a peer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file does not follow the edge-list format.
    #[error("malformed graph file: {0}")]
    Parse(String),

    /// An edge endpoint does not fit the declared node count.
    #[error("node index {index} out of range for graph with {nodes} nodes")]
    NodeOutOfRange {
        /// The offending endpoint.
        index: usize,
        /// Declared node count of the graph.
        nodes: usize,
    },

    /// A peer violated the coordinator/worker message exchange.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Failed to encode an outgoing message.
    #[error("encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// Failed to decode an incoming message.
    #[error("decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}
