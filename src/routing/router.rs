//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Store routes partitioned into middleware-scoped groups
//! - Look up the first matching route for a method and path
//! - Describe the table for logging and tests
//!
//! # Design Decisions
//! - Immutable after `build()` (safe for unsynchronized concurrent reads)
//! - Group middleware is composed once at build time, not per request
//! - A group's middleware applies to its own routes only
//! - O(n) scan; route counts are small

use std::collections::BTreeMap;
use std::fmt;

use axum::http::Method;
use serde::Serialize;

use crate::http::handler::SharedHandler;
use crate::http::middleware::{compose, SharedMiddleware};
use crate::routing::matcher::PathPattern;
use crate::routing::RouteError;

/// Independently middleware-scoped partitions of the route table.
///
/// Declaration order is match priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteGroup {
    Api,
    Static,
    Pages,
}

impl RouteGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteGroup::Api => "api",
            RouteGroup::Static => "static",
            RouteGroup::Pages => "pages",
        }
    }
}

impl fmt::Display for RouteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered route.
#[derive(Debug)]
pub struct Route {
    pub method: Method,
    pub pattern: PathPattern,
    /// Terminal handler, without group middleware.
    pub handler: SharedHandler,
    /// Terminal handler wrapped in the group's middleware chain.
    chain: SharedHandler,
}

#[derive(Debug, Default)]
struct GroupBuilder {
    middleware: Vec<SharedMiddleware>,
    routes: Vec<(Method, PathPattern, SharedHandler)>,
}

/// Collects routes and middleware before freezing them into a `RouteTable`.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    groups: BTreeMap<RouteGroup, GroupBuilder>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `middleware` to `group`'s chain.
    ///
    /// Middleware applies to every route of the group, including routes
    /// registered before this call.
    pub fn use_middleware(&mut self, group: RouteGroup, middleware: SharedMiddleware) -> &mut Self {
        self.groups.entry(group).or_default().middleware.push(middleware);
        self
    }

    /// Register a route.
    ///
    /// Fails if `pattern` is malformed or the same (group, method, pattern)
    /// was already registered.
    pub fn register(
        &mut self,
        group: RouteGroup,
        method: Method,
        pattern: &str,
        handler: SharedHandler,
    ) -> Result<&mut Self, RouteError> {
        let pattern = PathPattern::parse(pattern)?;
        let entry = self.groups.entry(group).or_default();

        if entry
            .routes
            .iter()
            .any(|(m, p, _)| *m == method && *p == pattern)
        {
            return Err(RouteError::DuplicateRoute {
                group,
                method,
                pattern: pattern.to_string(),
            });
        }

        entry.routes.push((method, pattern, handler));
        Ok(self)
    }

    /// Shorthand for `register(group, Method::GET, ..)`.
    pub fn get(
        &mut self,
        group: RouteGroup,
        pattern: &str,
        handler: SharedHandler,
    ) -> Result<&mut Self, RouteError> {
        self.register(group, Method::GET, pattern, handler)
    }

    /// Freeze the table, composing every route with its group's middleware.
    pub fn build(self) -> RouteTable {
        let groups = self
            .groups
            .into_iter()
            .map(|(group, builder)| {
                let routes = builder
                    .routes
                    .into_iter()
                    .map(|(method, pattern, handler)| Route {
                        chain: compose(&builder.middleware, handler.clone()),
                        method,
                        pattern,
                        handler,
                    })
                    .collect();
                CompiledGroup {
                    group,
                    middleware: builder.middleware,
                    routes,
                }
            })
            .collect();

        RouteTable { groups }
    }
}

#[derive(Debug)]
struct CompiledGroup {
    group: RouteGroup,
    middleware: Vec<SharedMiddleware>,
    routes: Vec<Route>,
}

/// Immutable, ordered route table.
#[derive(Debug)]
pub struct RouteTable {
    /// Sorted by group priority.
    groups: Vec<CompiledGroup>,
}

/// A successful lookup.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub group: RouteGroup,
    pub route: &'a Route,
    /// The group's middleware, outermost first.
    pub middleware: &'a [SharedMiddleware],
}

impl RouteMatch<'_> {
    /// The route's handler wrapped in its group's middleware.
    pub fn handler(&self) -> SharedHandler {
        self.route.chain.clone()
    }
}

/// Serializable view of one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub group: RouteGroup,
    pub method: String,
    pub pattern: String,
    pub handler: String,
    pub middleware: Vec<String>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Find the first route matching `method` and `path`.
    ///
    /// Groups are tried in priority order, routes in registration order.
    /// A path match with the wrong method is not a match.
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        self.groups.iter().find_map(|group| {
            group
                .routes
                .iter()
                .find(|route| route.method == *method && route.pattern.matches(path))
                .map(|route| RouteMatch {
                    group: group.group,
                    route,
                    middleware: &group.middleware,
                })
        })
    }

    /// Every route in match order.
    pub fn describe(&self) -> Vec<RouteDescriptor> {
        self.groups
            .iter()
            .flat_map(|group| {
                let middleware: Vec<String> = group
                    .middleware
                    .iter()
                    .map(|m| m.name().to_string())
                    .collect();
                group.routes.iter().map(move |route| RouteDescriptor {
                    group: group.group,
                    method: route.method.to_string(),
                    pattern: route.pattern.to_string(),
                    handler: route.handler.name().to_string(),
                    middleware: middleware.clone(),
                })
            })
            .collect()
    }

    /// Total number of registered routes.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.routes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
