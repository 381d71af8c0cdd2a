//! Extension-driven content types for static assets.
//!
//! Only extensions listed here are overridden; anything else is left to the
//! file server's own inference.

use std::collections::HashMap;
use std::path::Path;

/// Mapping from file extension (without the dot) to MIME type.
#[derive(Debug, Clone)]
pub struct ContentTypeTable {
    entries: HashMap<String, String>,
}

impl ContentTypeTable {
    /// An empty table. Every lookup falls through to the file server.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace a mapping. A leading dot on `extension` is ignored.
    pub fn with(mut self, extension: &str, mime: impl Into<String>) -> Self {
        self.entries
            .insert(extension.trim_start_matches('.').to_string(), mime.into());
        self
    }

    /// Look up the content type for the extension of `path`.
    ///
    /// Returns `None` for unknown extensions and for paths without one.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        let extension = Path::new(path).extension()?.to_str()?;
        self.entries.get(extension).map(String::as_str)
    }
}

impl Default for ContentTypeTable {
    fn default() -> Self {
        Self::empty()
            .with("js", "application/javascript; charset=utf-8")
            .with("css", "text/css; charset=utf-8")
    }
}
