//! Lifecycle management: startup and graceful shutdown.

pub mod shutdown;

pub use shutdown::Shutdown;
