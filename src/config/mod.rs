//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ENVIRONMENT + CLI flags
//!     → loader.rs (environment defaults, apply overrides)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → consumed once at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults
//! - No config files; the process environment and flags are the only inputs

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, Overrides};
pub use schema::{ListenerConfig, ObservabilityConfig, PagesConfig, SiteConfig, StaticFilesConfig};
pub use validation::ValidationError;
