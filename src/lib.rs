//! Small HTTP front door: a JSON status API, static assets and rendered pages
//! behind one group-scoped router.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod routing;

pub use config::SiteConfig;
pub use http::{Dispatcher, HttpServer};
pub use lifecycle::Shutdown;
pub use routing::{RouteGroup, RouteTable};
