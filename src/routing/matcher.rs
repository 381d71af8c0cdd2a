//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse route patterns (literal or trailing-wildcard)
//! - Match a request path against a pattern
//!
//! # Design Decisions
//! - Literal patterns use exact string equality
//! - `/prefix/*` matches any path starting with `/prefix/`, including
//!   `/prefix/` itself, but not `/prefix` or `/prefixes`
//! - Matching is case-sensitive
//! - No regex, no parameters

use std::fmt;

use crate::routing::RouteError;

/// Marker that ends a prefix pattern.
pub const WILDCARD: char = '*';

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathPattern {
    /// Matches exactly this path.
    Exact(String),
    /// Matches any path starting with this prefix (which ends in `/`).
    Prefix(String),
}

impl PathPattern {
    /// Parse a pattern such as `/api/system/status` or `/static/*`.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &'static str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        if !pattern.starts_with('/') {
            return Err(invalid("pattern must start with '/'"));
        }

        match pattern.find(WILDCARD) {
            None => Ok(Self::Exact(pattern.to_string())),
            Some(idx) if idx == pattern.len() - 1 => {
                let prefix = &pattern[..idx];
                if prefix.ends_with('/') {
                    Ok(Self::Prefix(prefix.to_string()))
                } else {
                    Err(invalid("wildcard must follow '/'"))
                }
            }
            Some(_) => Err(invalid("wildcard is only allowed at the end")),
        }
    }

    /// Returns true if `path` is matched by this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => path == expected,
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }

    /// For prefix patterns, the part of `path` after the prefix.
    pub fn remainder<'a>(&self, path: &'a str) -> Option<&'a str> {
        match self {
            Self::Exact(_) => None,
            Self::Prefix(prefix) => path.strip_prefix(prefix.as_str()),
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(path) => f.write_str(path),
            Self::Prefix(prefix) => write!(f, "{prefix}{WILDCARD}"),
        }
    }
}
