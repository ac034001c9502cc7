//! Client-side routing.
//!
//! # Data Flow
//! ```text
//! Navigation request (location or route name + params)
//!     → history.rs (hash location → path)
//!     → Router::resolve (first matching route, most specific first)
//!     → pattern.rs (segment match, parameter extraction)
//!     → Resolution { route name, view, load strategy, params }
//! ```
//!
//! Routes are compiled at startup and immutable afterwards. Unknown paths
//! land on the catch-all route when the table has one, otherwise resolution
//! fails with [`RouteError::NotFound`].

pub mod history;
pub mod pattern;
pub mod table;

use thiserror::Error;

pub use history::HashHistory;
pub use pattern::{RouteParams, RoutePattern};
pub use table::{LoadStrategy, Route, RouteTable, RouteTableBuilder};

use crate::views::ViewId;

/// Errors raised while building the table or resolving navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Route name '{name}' is registered more than once")]
    DuplicateName { name: String },

    #[error("Route patterns '{first}' and '{second}' collide")]
    Collision { first: String, second: String },

    #[error("No route matches '{path}'")]
    NotFound { path: String },

    #[error("No route named '{name}'")]
    UnknownName { name: String },

    #[error("Pattern '{pattern}' requires parameter '{param}'")]
    MissingParam { pattern: String, param: String },
}

/// What the caller asked to navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A location string: `#/watch/1`, `/watch/1`, or a full URL.
    Location(String),
    /// A named route with its parameters.
    Named { name: String, params: RouteParams },
}

impl NavigationTarget {
    pub fn location(location: impl Into<String>) -> Self {
        NavigationTarget::Location(location.into())
    }

    pub fn named<I, K, V>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        NavigationTarget::Named {
            name: name.into(),
            params: params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(location: &str) -> Self {
        NavigationTarget::Location(location.to_string())
    }
}

/// Outcome of resolving a path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The normalized path that was resolved (no query, no fragment).
    pub path: String,
    pub route_name: String,
    pub view: ViewId,
    pub strategy: LoadStrategy,
    pub params: RouteParams,
}

impl Resolution {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn is_lazy(&self) -> bool {
        self.strategy == LoadStrategy::Lazy
    }

    pub fn href(&self) -> String {
        history::href(&self.path)
    }
}

/// Resolves navigation requests against an immutable [`RouteTable`].
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// Router over [`RouteTable::default_routes`].
    pub fn with_default_routes() -> Result<Self, RouteError> {
        Ok(Self::new(RouteTable::default_routes()?))
    }

    pub fn routes(&self) -> &[Route] {
        self.table.routes()
    }

    /// Resolve a path. Query string and fragment are ignored.
    pub fn resolve(&self, path: &str) -> Result<Resolution, RouteError> {
        let path = normalize_path(path);

        for route in self.table.routes() {
            if let Some(params) = route.pattern.matches(&path) {
                tracing::debug!(
                    path = %path,
                    route = %route.name,
                    strategy = route.strategy.as_str(),
                    "Route resolved"
                );
                return Ok(Resolution {
                    path,
                    route_name: route.name.clone(),
                    view: route.view,
                    strategy: route.strategy,
                    params,
                });
            }
        }

        tracing::warn!(path = %path, "No route matched");
        Err(RouteError::NotFound { path })
    }

    /// Resolve a navigation target.
    pub fn resolve_target(&self, target: &NavigationTarget) -> Result<Resolution, RouteError> {
        match target {
            NavigationTarget::Location(location) => {
                self.resolve(&history::parse_location(location))
            }
            NavigationTarget::Named { name, params } => {
                let path = self.path_for(name, params)?;
                self.resolve(&path)
            }
        }
    }

    /// Build the path of a named route.
    pub fn path_for(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        let route = self
            .table
            .by_name(name)
            .ok_or_else(|| RouteError::UnknownName {
                name: name.to_string(),
            })?;
        route.pattern.build(params)
    }

    /// Build the hash href of a named route.
    pub fn href_for(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        Ok(history::href(&self.path_for(name, params)?))
    }
}

/// Strip query and fragment, collapse empty segments.
fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let joined = pattern::split_path(path).collect::<Vec<_>>().join("/");
    format!("/{}", joined)
}
