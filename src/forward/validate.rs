//! Target domain validation.

use thiserror::Error;
use url::Url;

/// Why a candidate target was refused.
///
/// Both variants produce the same HTTP outcome; the distinction exists
/// only for log events.
#[derive(Debug, Error)]
pub enum RejectReason {
    #[error("target is not a valid absolute URL: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("hostname does not end with {0}")]
    DisallowedDomain(String),
}

/// Parse a candidate target and check its hostname suffix.
///
/// URL parsing lowercases hostnames, so the suffix check is effectively
/// case-insensitive on input case. No network access is performed.
pub fn validate_domain(candidate: &str, allowed_suffix: &str) -> Result<Url, RejectReason> {
    let parsed = Url::parse(candidate)?;

    match parsed.host_str() {
        Some(host) if host.ends_with(allowed_suffix) => Ok(parsed),
        _ => Err(RejectReason::DisallowedDomain(allowed_suffix.to_string())),
    }
}
