//! JSON-over-TCP relay library.
//!
//! Accepts `POST /get-recipe` with an arbitrary JSON body, forwards the body
//! over one fresh TCP connection to a fixed backend, reads until the backend
//! closes the connection, and returns the accumulated bytes parsed as JSON.

pub mod bridge;
pub mod config;
pub mod http;
pub mod lifecycle;

pub use bridge::{BridgeError, TcpBridge};
pub use config::RelayConfig;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
