//! Rendered pages.
//!
//! # Data Flow
//! ```text
//! GET / (pages group)
//!     → PageHandler (fixed page identifier, request context)
//!     → PageRenderer::render
//!     → 200 text/html, or the renderer's own error status
//! ```

pub mod renderer;

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    response::{Html, IntoResponse},
};

use crate::http::handler::{Handler, HandlerFuture};

pub use renderer::{PageContext, PageRenderer, RenderError, TemplatePages};

/// Renders one fixed page for every request it receives.
#[derive(Debug, Clone)]
pub struct PageHandler {
    page: String,
    renderer: Arc<dyn PageRenderer>,
}

impl PageHandler {
    pub fn new(page: impl Into<String>, renderer: Arc<dyn PageRenderer>) -> Self {
        Self {
            page: page.into(),
            renderer,
        }
    }
}

impl Handler for PageHandler {
    fn call(&self, request: Request<Body>) -> HandlerFuture {
        let context = PageContext::from_request(&request);
        let result = self.renderer.render(&self.page, &context);

        Box::pin(async move {
            match result {
                Ok(markup) => Html(markup).into_response(),
                Err(err) => {
                    tracing::error!(error = %err, path = %context.path, "Page render failed");
                    err.into_response()
                }
            }
        })
    }

    fn name(&self) -> &str {
        "page"
    }
}
