//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses parse as socket addresses
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::RelayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug)]
pub enum ValidationError {
    /// A field that should be a socket address does not parse as one.
    InvalidAddress { field: &'static str, value: String },
    /// A timeout that must be positive is zero.
    ZeroTimeout { field: &'static str },
    /// The request timeout does not leave room for the relay deadline.
    RequestTimeoutTooShort { request_secs: u64, relay_secs: u64 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidAddress { field, value } => {
                write!(f, "{} is not a valid socket address: {:?}", field, value)
            }
            ValidationError::ZeroTimeout { field } => {
                write!(f, "{} must be greater than zero", field)
            }
            ValidationError::RequestTimeoutTooShort {
                request_secs,
                relay_secs,
            } => {
                write!(
                    f,
                    "timeouts.request_secs ({}) must exceed timeouts.relay_secs ({})",
                    request_secs, relay_secs
                )
            }
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.backend.address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "backend.address",
            value: config.backend.address.clone(),
        });
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "timeouts.connect_secs",
        });
    }
    if config.timeouts.relay_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "timeouts.relay_secs",
        });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "timeouts.request_secs",
        });
    } else if config.timeouts.request_secs <= config.timeouts.relay_secs {
        errors.push(ValidationError::RequestTimeoutTooShort {
            request_secs: config.timeouts.request_secs,
            relay_secs: config.timeouts.relay_secs,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn rejects_bad_addresses() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.backend.address = "localhost".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().contains("listener.bind_address"));
        assert!(errors[1].to_string().contains("backend.address"));
    }

    #[test]
    fn rejects_zero_and_inverted_timeouts() {
        let mut config = RelayConfig::default();
        config.timeouts.connect_secs = 0;
        config.timeouts.request_secs = config.timeouts.relay_secs;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
