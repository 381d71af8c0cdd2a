//! HTTP handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum, transport tracing)
//!     → dispatcher.rs (route lookup, fallback)
//!     → middleware/ (group-scoped chain)
//!     → terminal handler
//!         response.rs      fixed status / not-found bodies
//!         static_files.rs  content_type.rs + file server
//!         pages            page renderer
//!     → Send to client
//! ```

pub mod content_type;
pub mod dispatcher;
pub mod handler;
pub mod middleware;
pub mod response;
pub mod server;
pub mod static_files;

pub use dispatcher::Dispatcher;
pub use handler::{Handler, HandlerFuture, SharedHandler};
pub use server::HttpServer;
