//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, address parses)
//! - Check the suffix and scheme are usable by the forward logic
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: ForwarderConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ForwarderConfig;

/// A single semantic violation found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("allowed_suffix '{0}' must start with '.' and name at least one label")]
    InvalidSuffix(String),

    #[error("default_scheme '{0}' must be 'http' or 'https'")]
    InvalidScheme(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &ForwarderConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let suffix = &config.forward.allowed_suffix;
    if !suffix.starts_with('.') || suffix.len() < 2 {
        errors.push(ValidationError::InvalidSuffix(suffix.clone()));
    }

    match config.forward.default_scheme.as_str() {
        "http" | "https" => {}
        other => errors.push(ValidationError::InvalidScheme(other.to_string())),
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
