//! Core forwarding logic.
//!
//! # Data Flow
//! ```text
//! request path
//!     → target.rs (extract candidate, apply default scheme)
//!     → validate.rs (parse URL, check hostname suffix)
//!     → redirect.rs (merge original query, serialize Location)
//! ```
//!
//! # Design Decisions
//! - All three steps are pure functions; no I/O, no shared state
//! - Malformed URLs and wrong-suffix hostnames fold into one rejection
//!   outcome (the handler answers 403 for both)
//! - The candidate is taken from the path verbatim; no percent decoding

pub mod redirect;
pub mod target;
pub mod validate;

pub use redirect::build_redirect;
pub use target::extract_target;
pub use validate::{validate_domain, RejectReason};
