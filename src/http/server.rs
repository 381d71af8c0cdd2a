//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum app that carries every request to the dispatcher
//! - Wire up transport-level tracing
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use std::sync::Arc;

use axum::{body::Body, extract::State, http::Request, response::Response, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::http::dispatcher::Dispatcher;
use crate::lifecycle::{Shutdown, StartupError};
use crate::routing::{site_routes, Collaborators};

/// HTTP server for the site.
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server with the production collaborators.
    pub fn new(config: &SiteConfig) -> Result<Self, StartupError> {
        let collaborators = Collaborators::from_config(config)?;
        Self::with_collaborators(config, &collaborators)
    }

    /// Create a server whose handlers delegate to `collaborators`.
    pub fn with_collaborators(
        config: &SiteConfig,
        collaborators: &Collaborators,
    ) -> Result<Self, StartupError> {
        let table = site_routes(config, collaborators)?;
        for route in table.describe() {
            tracing::debug!(
                group = %route.group,
                method = %route.method,
                pattern = %route.pattern,
                handler = %route.handler,
                middleware = ?route.middleware,
                "Route registered"
            );
        }

        let router = Self::build_router(Arc::new(Dispatcher::new(table)));
        Ok(Self { router })
    }

    /// Build the axum app. All routing happens in the dispatcher.
    fn build_router(dispatcher: Arc<Dispatcher>) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(dispatcher)
            .layer(TraceLayer::new_for_http())
    }

    /// The axum app, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` is triggered, then drain.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.signalled())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn dispatch(State(dispatcher): State<Arc<Dispatcher>>, request: Request<Body>) -> Response {
    dispatcher.handle(request).await
}
