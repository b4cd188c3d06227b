//! Candidate target extraction from the request path.

/// Extract the target URL embedded in a request path.
///
/// Everything after the leading `/` is the candidate, taken verbatim —
/// further `/`, `:` and `&` characters stay untouched. A candidate that
/// does not already start with `http://` or `https://` is prefixed with
/// `<default_scheme>://`.
///
/// Returns `None` for the bare root path.
pub fn extract_target(path: &str, default_scheme: &str) -> Option<String> {
    let candidate = path.strip_prefix('/').unwrap_or(path);

    if candidate.is_empty() {
        return None;
    }

    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        Some(candidate.to_string())
    } else {
        Some(format!("{default_scheme}://{candidate}"))
    }
}
