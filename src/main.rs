//! Site front door.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ axum ──▶ Dispatcher ──▶ api     GET /api/system/status  [log_route]
//!                                         ──▶ static  GET /static/*
//!                                         ──▶ pages   GET /
//!                                         ──▶ 404     Page not found
//! ```

use std::path::PathBuf;

use clap::Parser;

use frontdoor::config::{load_config, Overrides};
use frontdoor::lifecycle::{signals, startup, Shutdown};
use frontdoor::observability;

#[derive(Parser)]
#[command(name = "frontdoor")]
#[command(about = "Serves the status API, static assets and pages", long_about = None)]
struct Cli {
    /// Deployment environment; PRODUCTION listens on :8000, anything else on :8080.
    #[arg(long, env = "ENVIRONMENT")]
    environment: Option<String>,

    /// Override the listen address.
    #[arg(long, env = "FRONTDOOR_BIND")]
    bind: Option<String>,

    /// Directory served under /static/.
    #[arg(long, env = "FRONTDOOR_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, env = "FRONTDOOR_LOG")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(
        cli.environment.as_deref(),
        Overrides {
            bind_address: cli.bind,
            static_root: cli.static_dir,
            log_level: cli.log_level,
        },
    )?;

    observability::init_logging(&config.observability);
    let effective = serde_json::to_string(&config)?;
    tracing::debug!(config = %effective, "Configuration loaded");

    let (server, listener) = startup::prepare(&config).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting the server");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());
    server.run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
