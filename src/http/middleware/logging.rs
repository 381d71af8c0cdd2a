//! Route access logging middleware.
//! Records the path of every request that reaches its group.

use std::fmt;
use std::sync::Arc;

use axum::{body::Body, http::Request};

use crate::http::handler::{Handler, HandlerFuture, SharedHandler};
use crate::http::middleware::Middleware;

/// Receives one line of diagnostic text per logged request.
///
/// Shared across concurrent requests, so implementations must tolerate
/// concurrent writes.
pub trait DiagnosticSink: Send + Sync + fmt::Debug {
    fn record(&self, line: &str);
}

/// Sink that forwards accessed paths to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, line: &str) {
        tracing::info!(path = %line, "Accessed route");
    }
}

/// Logs the request path before delegating to the rest of the chain.
#[derive(Debug, Clone)]
pub struct LogRouteMiddleware {
    sink: Arc<dyn DiagnosticSink>,
}

impl LogRouteMiddleware {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }
}

impl Middleware for LogRouteMiddleware {
    fn name(&self) -> &str {
        "log_route"
    }

    fn wrap(&self, next: SharedHandler) -> SharedHandler {
        Arc::new(LoggedHandler {
            sink: self.sink.clone(),
            next,
        })
    }
}

#[derive(Debug)]
struct LoggedHandler {
    sink: Arc<dyn DiagnosticSink>,
    next: SharedHandler,
}

impl Handler for LoggedHandler {
    fn call(&self, request: Request<Body>) -> HandlerFuture {
        self.sink.record(request.uri().path());
        self.next.call(request)
    }

    fn name(&self) -> &str {
        self.next.name()
    }
}
