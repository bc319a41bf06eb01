//! Failure response shape for the front door.
//!
//! Every bridge failure maps to the same 500 body; the `message` field is the
//! only place failure causes are distinguished, and only for humans.

use serde::{Deserialize, Serialize};

/// The JSON body returned for any failed relay: `{"success": false, "message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayFailure {
    pub success: bool,
    pub message: String,
}

impl RelayFailure {
    /// Build a failure body with `success` pinned to `false`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
