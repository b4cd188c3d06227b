//! Response construction.
//!
//! # Responsibilities
//! - Build the three terminal responses: redirect, rejection, usage
//! - Keep status codes and bodies in one place so handler and tests agree

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// 302 redirect to the given location.
pub struct Redirect {
    pub location: String,
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.location)]).into_response()
    }
}

/// 403 rejection for targets outside the allowed suffix.
///
/// Covers malformed targets too; the two are not distinguished on the
/// wire.
pub fn domain_rejected(allowed_suffix: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("Error: Only {allowed_suffix} domains are allowed for security reasons"),
    )
        .into_response()
}

/// 400 usage message for requests that carry no target in the path.
pub fn usage(homepage_url: &str, allowed_suffix: &str) -> Response {
    let body = format!(
        "Forward Direct\n\n\
         Usage: /<target-url>\n\n\
         The target's hostname must end in {allowed_suffix}. A candidate without a\n\
         scheme is tried as http://<candidate>. The original query string is\n\
         carried over to the redirect.\n\n\
         Example: /http://myapp{allowed_suffix}/auth/callback?code=123\n\n\
         {homepage_url}\n"
    );

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "text/plain")],
        body,
    )
        .into_response()
}
