//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, relay handler)
//!     → bridge relays the JSON body to the backend
//!     → response.rs (uniform failure shape on error)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::RelayFailure;
pub use server::RelayServer;
