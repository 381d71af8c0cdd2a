//! Configuration assembly from the process environment and CLI.

use std::path::PathBuf;

use crate::config::schema::{SiteConfig, PRODUCTION_BIND_ADDRESS};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Explicit overrides, usually from command line flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub static_root: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Default configuration for the given `ENVIRONMENT` value.
///
/// `PRODUCTION` listens on port 8000, anything else on 8080.
pub fn config_for_environment(environment: Option<&str>) -> SiteConfig {
    let mut config = SiteConfig::default();
    if environment == Some("PRODUCTION") {
        config.listener.bind_address = PRODUCTION_BIND_ADDRESS.to_string();
    }
    config
}

/// Build and validate the effective configuration.
pub fn load_config(environment: Option<&str>, overrides: Overrides) -> Result<SiteConfig, ConfigError> {
    let mut config = config_for_environment(environment);

    if let Some(bind_address) = overrides.bind_address {
        config.listener.bind_address = bind_address;
    }
    if let Some(root) = overrides.static_root {
        config.static_files.root = root;
    }
    if let Some(level) = overrides.log_level {
        config.observability.log_level = level;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
