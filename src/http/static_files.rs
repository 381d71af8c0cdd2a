//! Static asset serving.
//!
//! # Responsibilities
//! - Strip the route prefix from the request path
//! - Resolve an extension-driven content type
//! - Delegate byte streaming to a `StaticFileServer`
//! - Keep file server redirects under the route prefix
//!
//! # Design Decisions
//! - The override is applied only to responses the file server produced
//!   successfully (2xx, 304); its error pages keep their own content type
//! - Unknown extensions get no override, the file server decides
//! - The extension is read from the percent-decoded path
//! - Path traversal is the file server's concern (`ServeDir` rejects it)

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::http::content_type::ContentTypeTable;
use crate::http::handler::{Handler, HandlerFuture};

/// Streams files addressed by a path relative to its root.
pub trait StaticFileServer: Send + Sync + fmt::Debug {
    /// Serve `relative` (no leading `/`). `request` carries the incoming
    /// method and headers (conditional and range requests).
    fn serve(&self, relative: &str, request: Request<Body>) -> HandlerFuture;
}

/// Serves files from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryFiles {
    root: PathBuf,
    service: ServeDir,
}

impl DirectoryFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            service: ServeDir::new(&root),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StaticFileServer for DirectoryFiles {
    fn serve(&self, relative: &str, request: Request<Body>) -> HandlerFuture {
        let service = self.service.clone();
        let uri = Uri::try_from(format!("/{relative}"));

        Box::pin(async move {
            let Ok(uri) = uri else {
                return StatusCode::BAD_REQUEST.into_response();
            };

            let (mut parts, body) = request.into_parts();
            parts.uri = uri;

            match service.oneshot(Request::from_parts(parts, body)).await {
                Ok(response) => response.map(Body::new),
                Err(never) => match never {},
            }
        })
    }
}

/// Handler for the static wildcard route.
#[derive(Debug, Clone)]
pub struct StaticFileHandler {
    prefix: String,
    content_types: Arc<ContentTypeTable>,
    files: Arc<dyn StaticFileServer>,
}

impl StaticFileHandler {
    /// `prefix` is stripped from the request path before delegating,
    /// e.g. `/static/`.
    pub fn new(
        prefix: impl Into<String>,
        content_types: Arc<ContentTypeTable>,
        files: Arc<dyn StaticFileServer>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            content_types,
            files,
        }
    }
}

impl Handler for StaticFileHandler {
    fn call(&self, request: Request<Body>) -> HandlerFuture {
        let path = request.uri().path();
        let relative = path
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(path)
            .trim_start_matches('/')
            .to_string();

        // The file server opens the decoded path, so the extension is read from it too.
        let decoded = percent_decode_str(&relative).decode_utf8_lossy();
        let content_type = self
            .content_types
            .resolve(&decoded)
            .and_then(|mime| HeaderValue::from_str(mime).ok());

        tracing::debug!(path = %decoded, content_type = ?content_type, "Serving static file");

        let mount = self.prefix.trim_end_matches('/').to_string();
        let served = self.files.serve(&relative, request);
        Box::pin(async move {
            let mut response = served.await;
            let status = response.status();
            if let Some(value) = content_type {
                if status.is_success() || status == StatusCode::NOT_MODIFIED {
                    response.headers_mut().insert(header::CONTENT_TYPE, value);
                }
            }
            if status.is_redirection() {
                remount_location(&mut response, &mount);
            }
            response
        })
    }

    fn name(&self) -> &str {
        "static_files"
    }
}

/// File servers see paths relative to their root, so a redirect such as
/// `Location: /js/` is moved back under the route's mount point.
fn remount_location(response: &mut Response, mount: &str) {
    let Some(location) = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
    else {
        return;
    };
    if !location.starts_with('/') || location.starts_with("//") {
        return;
    }

    if let Ok(value) = HeaderValue::from_str(&format!("{mount}{location}")) {
        response.headers_mut().insert(header::LOCATION, value);
    }
}
