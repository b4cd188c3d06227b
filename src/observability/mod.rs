//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; request ID flows into handler events
//! - Log level configurable via `RUST_LOG`

pub mod logging;
