//! The bridge client: one relay exchange per call.
//!
//! # Responsibilities
//! - Open one TCP connection to the configured backend per call
//! - Write the serialized payload as the entire request
//! - Accumulate response bytes until the peer closes the connection
//! - Parse the accumulated buffer as a single JSON document
//!
//! # Design Decisions
//! - Read-until-close framing is preserved for backend compatibility: the
//!   backend signals "response complete" by closing, not with a length
//!   prefix or delimiter
//! - Connections are never reused; each call owns its socket and buffer
//! - The whole exchange runs under a configurable deadline instead of
//!   hanging forever on a backend that never closes

use std::time::Duration;

use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::bridge::error::BridgeError;
use crate::config::{BackendConfig, TimeoutConfig};

/// Client for the one-shot JSON-over-TCP backend protocol.
///
/// Holds only immutable configuration, so a single instance is shared across
/// concurrent requests without any cross-request state.
pub struct TcpBridge {
    backend_addr: String,
    connect_timeout: Duration,
    relay_timeout: Duration,
}

impl TcpBridge {
    /// Create a bridge for the given backend and deadlines.
    pub fn new(backend: &BackendConfig, timeouts: &TimeoutConfig) -> Self {
        Self {
            backend_addr: backend.address.clone(),
            connect_timeout: Duration::from_secs(timeouts.connect_secs),
            relay_timeout: Duration::from_secs(timeouts.relay_secs),
        }
    }

    /// The backend address this bridge connects to.
    pub fn backend_addr(&self) -> &str {
        &self.backend_addr
    }

    /// Relay one payload to the backend and return its parsed response.
    ///
    /// Settles exactly once: either the full parsed document or an error.
    /// Partial data is never surfaced to the caller.
    pub async fn relay(&self, payload: &Value) -> Result<Value, BridgeError> {
        match tokio::time::timeout(self.relay_timeout, self.exchange(payload)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    backend = %self.backend_addr,
                    deadline = ?self.relay_timeout,
                    "Relay deadline exceeded"
                );
                Err(BridgeError::Timeout(self.relay_timeout))
            }
        }
    }

    /// One write, one read-to-close, one parse.
    async fn exchange(&self, payload: &Value) -> Result<Value, BridgeError> {
        let mut stream =
            tokio::time::timeout(self.connect_timeout, TcpStream::connect(&self.backend_addr))
                .await
                .map_err(|_| {
                    BridgeError::Connection(std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        format!("connect to {} timed out", self.backend_addr),
                    ))
                })?
                .map_err(BridgeError::Connection)?;

        tracing::debug!(backend = %self.backend_addr, "Backend connection opened");

        let request = serde_json::to_vec(payload).map_err(BridgeError::Parse)?;
        stream
            .write_all(&request)
            .await
            .map_err(BridgeError::Connection)?;
        stream.flush().await.map_err(BridgeError::Connection)?;

        let mut buffer = Vec::new();
        stream
            .read_to_end(&mut buffer)
            .await
            .map_err(BridgeError::Connection)?;

        tracing::debug!(
            backend = %self.backend_addr,
            response_bytes = buffer.len(),
            "Backend closed connection"
        );

        serde_json::from_slice(&buffer).map_err(BridgeError::Parse)
    }
}
