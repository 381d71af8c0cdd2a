//! Request dispatch.
//!
//! # Responsibilities
//! - Match each request against the route table
//! - Run the matched route through its group's middleware chain
//! - Answer unmatched requests with the not-found fallback
//!
//! # Design Decisions
//! - Matching is total: every request yields a route or the fallback
//! - The fallback never triggers further routing
//! - Collaborator responses pass through untouched

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response};

use crate::http::handler::SharedHandler;
use crate::http::response::NotFoundHandler;
use crate::routing::RouteTable;

/// Single entry point for inbound requests.
#[derive(Debug)]
pub struct Dispatcher {
    table: RouteTable,
    fallback: SharedHandler,
}

impl Dispatcher {
    /// Dispatcher with the standard 404 fallback.
    pub fn new(table: RouteTable) -> Self {
        Self::with_fallback(table, Arc::new(NotFoundHandler))
    }

    pub fn with_fallback(table: RouteTable, fallback: SharedHandler) -> Self {
        Self { table, fallback }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Handle one request.
    pub async fn handle(&self, request: Request<Body>) -> Response {
        let handler = match self.table.match_route(request.method(), request.uri().path()) {
            Some(matched) => {
                tracing::debug!(
                    method = %request.method(),
                    path = %request.uri().path(),
                    group = %matched.group,
                    pattern = %matched.route.pattern,
                    "Route matched"
                );
                matched.handler()
            }
            None => {
                tracing::debug!(
                    method = %request.method(),
                    path = %request.uri().path(),
                    "No route matched"
                );
                self.fallback.clone()
            }
        };

        handler.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::handler::{Handler, HandlerFuture};
    use crate::http::middleware::{DiagnosticSink, LogRouteMiddleware};
    use crate::http::response::StatusHandler;
    use crate::routing::RouteGroup;
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingSink(AtomicUsize);

    impl DiagnosticSink for CountingSink {
        fn record(&self, _line: &str) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Debug)]
    struct Teapot;

    impl Handler for Teapot {
        fn call(&self, _request: Request<Body>) -> HandlerFuture {
            Box::pin(async { StatusCode::IM_A_TEAPOT.into_response() })
        }

        fn name(&self) -> &str {
            "teapot"
        }
    }

    fn dispatcher(sink: Arc<CountingSink>) -> Dispatcher {
        let mut builder = RouteTable::builder();
        builder
            .use_middleware(RouteGroup::Api, Arc::new(LogRouteMiddleware::new(sink)))
            .get(RouteGroup::Api, "/api/system/status", Arc::new(StatusHandler))
            .unwrap()
            .get(RouteGroup::Pages, "/", Arc::new(Teapot))
            .unwrap();
        Dispatcher::new(builder.build())
    }

    fn request(method: Method, path: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_matched_route_runs_through_group_chain() {
        let sink = Arc::new(CountingSink::default());
        let dispatcher = dispatcher(sink.clone());

        let response = dispatcher
            .handle(request(Method::GET, "/api/system/status"))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(sink.0.load(Ordering::SeqCst), 1);

        let response = dispatcher.handle(request(Method::GET, "/")).await;
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(sink.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unmatched_requests_fall_back() {
        let sink = Arc::new(CountingSink::default());
        let dispatcher = dispatcher(sink.clone());

        for (method, path) in [
            (Method::GET, "/does-not-exist"),
            (Method::POST, "/api/system/status"),
            (Method::HEAD, "/"),
        ] {
            let response = dispatcher.handle(request(method, path)).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
        assert_eq!(sink.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_custom_fallback() {
        let dispatcher = Dispatcher::with_fallback(RouteTable::builder().build(), Arc::new(Teapot));
        let response = dispatcher.handle(request(Method::GET, "/")).await;
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert!(dispatcher.table().is_empty());
    }
}
