//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation of the assembled config
//! - Validate value shapes (socket address, URL prefix)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - The static root is not checked here; the file server answers 404

use std::net::SocketAddr;

use crate::config::schema::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address {0:?}")]
    BindAddress(String),

    #[error("static url prefix {0:?} must start and end with '/'")]
    UrlPrefix(String),

    #[error("index page must not be empty")]
    EmptyIndexPage,
}

pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let prefix = &config.static_files.url_prefix;
    if !prefix.starts_with('/') || !prefix.ends_with('/') {
        errors.push(ValidationError::UrlPrefix(prefix.clone()));
    }

    if config.pages.index_page.trim().is_empty() {
        errors.push(ValidationError::EmptyIndexPage);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
