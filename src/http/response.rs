//! Fixed responses.
//!
//! # Responsibilities
//! - System status endpoint (always 200, fixed JSON body)
//! - Not-found fallback (always 404, fixed plain-text body)
//!
//! # Design Decisions
//! - Bodies are static byte strings, so repeated requests are byte-identical
//! - Neither handler performs I/O or can fail

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::handler::{Handler, HandlerFuture};

/// Content type of the status endpoint.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Content type of the not-found fallback.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Body returned by the status endpoint.
pub const STATUS_BODY: &str = r#"{"status": 200, "message": "OK"}"#;

/// Body returned when no route matches.
pub const NOT_FOUND_BODY: &str = "Page not found";

/// Build the system status response.
pub fn status_response() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        STATUS_BODY,
    )
        .into_response()
}

/// Build the not-found response.
pub fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
        NOT_FOUND_BODY,
    )
        .into_response()
}

/// Handler for `GET /api/system/status`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusHandler;

impl Handler for StatusHandler {
    fn call(&self, _request: Request<Body>) -> HandlerFuture {
        Box::pin(async { status_response() })
    }

    fn name(&self) -> &str {
        "status"
    }
}

/// Fallback invoked when no route in any group matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFoundHandler;

impl Handler for NotFoundHandler {
    fn call(&self, _request: Request<Body>) -> HandlerFuture {
        Box::pin(async { not_found_response() })
    }

    fn name(&self) -> &str {
        "not_found"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_status_response() {
        let response = StatusHandler.call(Request::new(Body::empty())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
        assert_eq!(body_of(response).await, r#"{"status": 200, "message": "OK"}"#);
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = NotFoundHandler.call(Request::new(Body::empty())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            TEXT_CONTENT_TYPE
        );
        assert_eq!(body_of(response).await, "Page not found");
    }
}
