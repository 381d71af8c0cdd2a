//! End-to-end dispatch through the axum app, without a socket.

use axum::http::{header, StatusCode};

mod common;

use common::TestSite;

#[tokio::test]
async fn test_status_endpoint() {
    let site = TestSite::new();
    let (response, body) = site.send("GET", "/api/system/status").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json; charset=utf-8"
    );
    assert_eq!(body, br#"{"status": 200, "message": "OK"}"#);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let site = TestSite::new();
    let (response, body) = site.send("GET", "/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(body, b"Page not found");
}

#[tokio::test]
async fn test_wrong_method_is_404() {
    let site = TestSite::new();
    for (method, path) in [
        ("POST", "/api/system/status"),
        ("PUT", "/"),
        ("DELETE", "/static/js/canvas.js"),
    ] {
        let (response, body) = site.send(method, path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {path}");
        assert_eq!(body, b"Page not found");
    }
}

#[tokio::test]
async fn test_static_content_types() {
    let site = TestSite::new();

    let (response, body) = site.send("GET", "/static/js/canvas.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript; charset=utf-8"
    );
    assert_eq!(body, b"var gridSize = 25;\n");

    let (response, _) = site.send("GET", "/static/css/site.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/css; charset=utf-8"
    );

    // Not in the table: the file server's own inference applies.
    let (response, body) = site.send("GET", "/static/img/logo.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(body, [0x89, b'P', b'N', b'G']);

    let (response, _) = site.send("GET", "/static/notes.txt").await;
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}

#[tokio::test]
async fn test_missing_static_file_comes_from_file_server() {
    let site = TestSite::new();
    let (response, body) = site.send("GET", "/static/js/missing.js").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_ne!(
        response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
        Some(&b"application/javascript; charset=utf-8"[..])
    );
    assert_ne!(body, b"Page not found");
}

#[tokio::test]
async fn test_static_prefix_boundaries() {
    let site = TestSite::new();

    // Matches the static route; the directory has no index so the file server answers.
    let (response, body) = site.send("GET", "/static/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_ne!(body, b"Page not found");

    // Not under the prefix at all: router fallback.
    let (response, body) = site.send("GET", "/statics").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body, b"Page not found");
}

#[tokio::test]
async fn test_static_directory_redirect_stays_under_prefix() {
    let site = TestSite::new();
    let (response, _) = site.send("GET", "/static/js").await;
    assert!(response.status().is_redirection());
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert_eq!(location, "/static/js/");

    // The redirect target is still the file server's, not the router fallback.
    let (_, body) = site.send("GET", location).await;
    assert_ne!(body, b"Page not found");
}

#[tokio::test]
async fn test_static_encoded_path_gets_content_type() {
    let site = TestSite::new();
    let (response, body) = site.send("GET", "/static/js/canvas%2Ejs").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript; charset=utf-8"
    );
    assert_eq!(body, b"var gridSize = 25;\n");
}

#[tokio::test]
async fn test_static_traversal_rejected() {
    let site = TestSite::new();
    let (response, _) = site.send("GET", "/static/../Cargo.toml").await;
    assert_ne!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_root_renders_demo_page() {
    let site = TestSite::new();
    let (response, body) = site.send("GET", "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("canvas-container"));
}

#[tokio::test]
async fn test_logging_middleware_scoped_to_api_group() {
    let site = TestSite::new();

    site.send("GET", "/api/system/status").await;
    assert_eq!(site.sink.count(), 1);

    site.send("GET", "/").await;
    site.send("GET", "/static/x").await;
    site.send("GET", "/static/js/canvas.js").await;
    site.send("GET", "/does-not-exist").await;
    assert_eq!(site.sink.count(), 1);

    site.send("GET", "/api/system/status").await;
    assert_eq!(site.sink.count(), 2);
    assert_eq!(
        site.sink.lines(),
        vec!["/api/system/status", "/api/system/status"]
    );
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let site = TestSite::new();

    for path in ["/api/system/status", "/does-not-exist"] {
        let (first, first_body) = site.send("GET", path).await;
        for _ in 0..5 {
            let (again, body) = site.send("GET", path).await;
            assert_eq!(again.status(), first.status());
            assert_eq!(again.headers(), first.headers());
            assert_eq!(body, first_body);
        }
    }
}
