//! TCP bridge subsystem.
//!
//! # Data Flow
//! ```text
//! JSON payload (from the front door)
//!     → client.rs (connect, write once, read until peer closes)
//!     → parse accumulated bytes as one JSON document
//!     → parsed document or BridgeError back to the front door
//! ```
//!
//! # Design Decisions
//! - One connection per relay call; never pooled, never reused
//! - Backend address and deadlines are construction-time config
//! - Failures carry the underlying cause; nothing is retried

pub mod client;
pub mod error;

pub use client::TcpBridge;
pub use error::BridgeError;
