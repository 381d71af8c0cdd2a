//! Configuration schema definitions.
//!
//! All types carry defaults so a bare `SiteConfig::default()` is a
//! runnable development configuration.

use std::path::PathBuf;

use serde::Serialize;

/// Root configuration for the site.
#[derive(Debug, Clone, Serialize, Default)]
pub struct SiteConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Static asset serving.
    pub static_files: StaticFilesConfig,

    /// Rendered pages.
    pub pages: PagesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEVELOPMENT_BIND_ADDRESS.to_string(),
        }
    }
}

/// Bind address outside production.
pub const DEVELOPMENT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Bind address when `ENVIRONMENT=PRODUCTION`.
pub const PRODUCTION_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Static asset configuration.
#[derive(Debug, Clone, Serialize)]
pub struct StaticFilesConfig {
    /// Directory files are served from.
    pub root: PathBuf,

    /// URL prefix routed to the file server; stripped before lookup.
    pub url_prefix: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/app/static"),
            url_prefix: "/static/".to_string(),
        }
    }
}

/// Page configuration.
#[derive(Debug, Clone, Serialize)]
pub struct PagesConfig {
    /// Page identifier rendered for `/`.
    pub index_page: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            index_page: "demo".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
