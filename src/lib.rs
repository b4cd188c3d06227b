//! Forward Direct — a `.test` domain HTTP redirector.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────┐
//!                  │               FORWARDER                     │
//!                  │                                             │
//!   Client Request │  ┌─────────┐    ┌──────────────────────┐   │
//!   ───────────────┼─▶│  http   │───▶│       forward        │   │
//!                  │  │ server  │    │ extract → validate → │   │
//!                  │  └─────────┘    │      build redirect  │   │
//!                  │                 └──────────┬───────────┘   │
//!                  │                            │               │
//!   Client Response│  ┌─────────┐               │               │
//!   ◀──────────────┼──│response │◀──────────────┘               │
//!                  │  │ builder │                               │
//!                  │  └─────────┘                               │
//!                  │                                             │
//!                  │  ┌───────────────────────────────────────┐ │
//!                  │  │        Cross-Cutting Concerns          │ │
//!                  │  │  ┌────────┐ ┌───────────┐ ┌─────────┐ │ │
//!                  │  │  │ config │ │ observa-  │ │lifecycle│ │ │
//!                  │  │  │        │ │ bility    │ │         │ │ │
//!                  │  │  └────────┘ └───────────┘ └─────────┘ │ │
//!                  │  └───────────────────────────────────────┘ │
//!                  └────────────────────────────────────────────┘
//! ```
//!
//! A request's path embeds a target URL. The forwarder validates that the
//! target's hostname ends in the allowed suffix (`.test` by default) and
//! answers with a 302 redirect carrying over the original query string.
//! The core is three pure functions with no shared state; every request
//! is handled independently.

// Core subsystems
pub mod config;
pub mod forward;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::ForwarderConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
