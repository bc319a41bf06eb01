//! Bridge error definitions.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while relaying one request to the backend.
///
/// Every variant is terminal for the request that hit it: the bridge never
/// retries, and the front door maps all of them to the same 500 shape.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The transport failed to establish or maintain the connection.
    #[error("connection error: {0}")]
    Connection(#[source] std::io::Error),

    /// The backend closed the connection but the accumulated bytes are not
    /// one valid JSON document (including zero bytes received).
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// The backend did not complete the exchange within the deadline.
    #[error("backend did not respond within {0:?}")]
    Timeout(Duration),
}
