//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn every startup failure into one fatal error type
//! - Bind the listener last, once routes are known to be valid

use tokio::net::TcpListener;

use crate::config::{ConfigError, SiteConfig};
use crate::http::HttpServer;
use crate::routing::RouteError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Routes(#[from] RouteError),

    #[error("template error: {0}")]
    Templates(#[from] minijinja::Error),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Build the server and bind its listener.
pub async fn prepare(config: &SiteConfig) -> Result<(HttpServer, TcpListener), StartupError> {
    if !config.static_files.root.is_dir() {
        tracing::warn!(
            root = %config.static_files.root.display(),
            "Static root is not a directory; static requests will 404"
        );
    }

    let server = HttpServer::new(config)?;

    let address = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    Ok((server, listener))
}
