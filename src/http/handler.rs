//! Terminal handler abstraction.
//!
//! # Responsibilities
//! - Define the `Handler` capability every route endpoint implements
//! - Provide a shared, type-erased handle for storing handlers in the route table
//!
//! # Design Decisions
//! - Handlers are `Send + Sync` and shared through `Arc` (read-only after startup)
//! - Each handler names itself so the route table can be enumerated
//! - Responses are axum `Response`s; a handler never fails at this layer,
//!   collaborator failures are already encoded as HTTP statuses

use std::fmt;
use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response};
use futures_util::future::BoxFuture;

/// Future returned by a handler invocation.
pub type HandlerFuture = BoxFuture<'static, Response>;

/// Produces a response from a request.
pub trait Handler: Send + Sync + fmt::Debug {
    /// Handle one request.
    fn call(&self, request: Request<Body>) -> HandlerFuture;

    /// Short label used when describing the route table.
    fn name(&self) -> &str;
}

/// A handler shared between the route table and in-flight requests.
pub type SharedHandler = Arc<dyn Handler>;
