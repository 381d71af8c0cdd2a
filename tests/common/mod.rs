//! Shared utilities for integration tests.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use frontdoor::config::SiteConfig;
use frontdoor::http::middleware::DiagnosticSink;
use frontdoor::routing::Collaborators;
use frontdoor::HttpServer;

/// Sink that remembers every line and counts them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    count: AtomicUsize,
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, line: &str) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// A site backed by a temporary static root and a recording sink.
pub struct TestSite {
    pub server: HttpServer,
    pub sink: Arc<RecordingSink>,
    // Keeps the static root alive for the test's duration.
    _static_root: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let static_root = tempfile::tempdir().unwrap();
        fs::create_dir_all(static_root.path().join("js")).unwrap();
        fs::create_dir_all(static_root.path().join("css")).unwrap();
        fs::create_dir_all(static_root.path().join("img")).unwrap();
        fs::write(static_root.path().join("js/canvas.js"), "var gridSize = 25;\n").unwrap();
        fs::write(static_root.path().join("css/site.css"), "body { margin: 0; }\n").unwrap();
        fs::write(static_root.path().join("img/logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
        fs::write(static_root.path().join("notes.txt"), "plain\n").unwrap();

        let mut config = SiteConfig::default();
        config.listener.bind_address = "127.0.0.1:0".to_string();
        config.static_files.root = static_root.path().to_path_buf();

        let sink = Arc::new(RecordingSink::default());
        let mut collaborators = Collaborators::from_config(&config).unwrap();
        collaborators.sink = sink.clone();

        let server = HttpServer::with_collaborators(&config, &collaborators).unwrap();
        Self {
            server,
            sink,
            _static_root: static_root,
        }
    }

    #[allow(dead_code)]
    pub fn router(&self) -> Router {
        self.server.router()
    }

    /// Send one request through the full app.
    #[allow(dead_code)]
    pub async fn send(&self, method: &str, path: &str) -> (Response<Body>, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = self.router().oneshot(request).await.unwrap();
        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        (Response::from_parts(parts, Body::empty()), bytes.to_vec())
    }
}
