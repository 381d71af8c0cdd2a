//! Page rendering backed by embedded minijinja templates.

use std::fmt;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};
use minijinja::Environment;
use serde::Serialize;

/// Request data exposed to templates.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub method: String,
    pub path: String,
}

impl PageContext {
    pub fn from_request(request: &Request<Body>) -> Self {
        Self {
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unknown page {0:?}")]
    UnknownPage(String),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        match self {
            RenderError::UnknownPage(_) => (StatusCode::NOT_FOUND, "Page not found").into_response(),
            RenderError::Template(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        }
    }
}

/// Turns a page identifier into markup.
pub trait PageRenderer: Send + Sync + fmt::Debug {
    fn render(&self, page: &str, context: &PageContext) -> Result<String, RenderError>;
}

const TEMPLATES: &[(&str, &str)] = &[
    ("layout", include_str!("../../templates/layout.html")),
    ("demo", include_str!("../../templates/demo.html")),
];

/// Pages compiled into the binary.
pub struct TemplatePages {
    env: Environment<'static>,
}

impl TemplatePages {
    /// Load the built-in templates. Fails if any template does not parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }
}

impl fmt::Debug for TemplatePages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplatePages")
            .field("templates", &TEMPLATES.iter().map(|(name, _)| *name).collect::<Vec<_>>())
            .finish()
    }
}

impl PageRenderer for TemplatePages {
    fn render(&self, page: &str, context: &PageContext) -> Result<String, RenderError> {
        // The layout is a building block, not a page.
        if page == "layout" {
            return Err(RenderError::UnknownPage(page.to_string()));
        }
        let template = self.env.get_template(page).map_err(|err| {
            if err.kind() == minijinja::ErrorKind::TemplateNotFound {
                RenderError::UnknownPage(page.to_string())
            } else {
                RenderError::Template(err)
            }
        })?;
        Ok(template.render(context)?)
    }
}
