//! Redirect URL construction.

use url::Url;

/// Build the final redirect URL for the `Location` header.
///
/// A non-empty query string on the original request replaces whatever
/// query the target carried. Without one, the target's own query stays
/// untouched.
pub fn build_redirect(mut target: Url, original_query: Option<&str>) -> String {
    if let Some(query) = original_query.filter(|q| !q.is_empty()) {
        target.set_query(Some(query));
    }

    target.to_string()
}
