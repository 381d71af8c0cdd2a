//! Middleware composition.
//!
//! # Data Flow
//! ```text
//! request
//!     → middleware[0] pre-logic
//!         → middleware[1] pre-logic
//!             → terminal handler
//!         ← middleware[1] post-logic
//!     ← middleware[0] post-logic
//! response
//! ```
//!
//! # Design Decisions
//! - Middleware is an explicit named object, not a closure, so a group's
//!   chain can be listed and tested on its own
//! - `compose` is the only place wrapping order is decided
//! - Outermost-registered-first: index 0 sees the request first and the
//!   response last

pub mod logging;

use std::fmt;
use std::sync::Arc;

use crate::http::handler::SharedHandler;

pub use logging::{DiagnosticSink, LogRouteMiddleware, TracingSink};

/// Wraps a handler with pre/post behavior.
pub trait Middleware: Send + Sync + fmt::Debug {
    /// Name used when describing a group's chain.
    fn name(&self) -> &str;

    /// Return a handler that runs this middleware around `next`.
    fn wrap(&self, next: SharedHandler) -> SharedHandler;
}

/// A middleware shared by every route of a group.
pub type SharedMiddleware = Arc<dyn Middleware>;

/// Compose `middleware` around `terminal`.
///
/// The returned handler runs `middleware[0]` first. With an empty slice the
/// terminal handler is returned as-is.
pub fn compose(middleware: &[SharedMiddleware], terminal: SharedHandler) -> SharedHandler {
    middleware
        .iter()
        .rev()
        .fold(terminal, |next, layer| layer.wrap(next))
}
