//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration (at startup):
//!     RouteTableBuilder::register(group, method, pattern, handler)
//!     → matcher.rs (parse pattern, reject duplicates)
//!     → build(): compose each route with its group's middleware
//!     → Freeze as immutable RouteTable
//!
//! Incoming request (method, path)
//!     → router.rs (groups in priority order: api, static, pages)
//!     → matcher.rs (evaluate pattern)
//!     → Return: RouteMatch or None
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (exact and prefix matching only)
//! - Deterministic: same input always matches same route
//! - First match wins (group priority, then registration order)
//! - Duplicate registrations are a startup error, not a runtime ambiguity

pub mod matcher;
pub mod router;
pub mod site;

use axum::http::Method;

pub use matcher::PathPattern;
pub use router::{
    RouteDescriptor, RouteGroup, RouteMatch, RouteTable, RouteTableBuilder,
};
pub use site::{site_routes, Collaborators};

/// Errors raised while building a route table.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route {method} {pattern} in {group} group")]
    DuplicateRoute {
        group: RouteGroup,
        method: Method,
        pattern: String,
    },

    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },
}
