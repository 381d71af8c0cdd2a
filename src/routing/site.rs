//! The site's route table.
//!
//! ```text
//! api     GET /api/system/status  → status        [log_route]
//! static  GET /static/*           → static files  []
//! pages   GET /                   → demo page     []
//! ```

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::http::content_type::ContentTypeTable;
use crate::http::middleware::{DiagnosticSink, LogRouteMiddleware, TracingSink};
use crate::http::response::StatusHandler;
use crate::http::static_files::{DirectoryFiles, StaticFileHandler, StaticFileServer};
use crate::pages::{PageHandler, PageRenderer, TemplatePages};
use crate::routing::router::{RouteGroup, RouteTable};
use crate::routing::RouteError;

/// External collaborators the route handlers delegate to.
#[derive(Debug, Clone)]
pub struct Collaborators {
    pub pages: Arc<dyn PageRenderer>,
    pub files: Arc<dyn StaticFileServer>,
    pub sink: Arc<dyn DiagnosticSink>,
    pub content_types: Arc<ContentTypeTable>,
}

impl Collaborators {
    /// Production collaborators: embedded templates, files under the
    /// configured static root, and a tracing sink.
    pub fn from_config(config: &SiteConfig) -> Result<Self, minijinja::Error> {
        Ok(Self {
            pages: Arc::new(TemplatePages::new()?),
            files: Arc::new(DirectoryFiles::new(&config.static_files.root)),
            sink: Arc::new(TracingSink),
            content_types: Arc::new(ContentTypeTable::default()),
        })
    }
}

/// Register the site's routes and freeze them into a table.
pub fn site_routes(config: &SiteConfig, collaborators: &Collaborators) -> Result<RouteTable, RouteError> {
    let prefix = &config.static_files.url_prefix;
    let mut builder = RouteTable::builder();

    // API routes
    builder
        .use_middleware(
            RouteGroup::Api,
            Arc::new(LogRouteMiddleware::new(collaborators.sink.clone())),
        )
        .get(RouteGroup::Api, "/api/system/status", Arc::new(StatusHandler))?;

    // Static file routes
    builder.get(
        RouteGroup::Static,
        &format!("{prefix}*"),
        Arc::new(StaticFileHandler::new(
            prefix.clone(),
            collaborators.content_types.clone(),
            collaborators.files.clone(),
        )),
    )?;

    // Pages
    builder.get(
        RouteGroup::Pages,
        "/",
        Arc::new(PageHandler::new(
            config.pages.index_page.clone(),
            collaborators.pages.clone(),
        )),
    )?;

    Ok(builder.build())
}
