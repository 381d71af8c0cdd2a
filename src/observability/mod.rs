//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields)
//!     → logging.rs (subscriber, filter, formatting)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level
//! - Transport spans come from tower-http's `TraceLayer`

pub mod logging;

pub use logging::{filter_directives, init_logging};
