//! Static route table.
//!
//! Built once at startup, validated, sorted by specificity, then frozen.

use std::collections::HashSet;

use super::pattern::RoutePattern;
use super::RouteError;
use crate::views::ViewId;

/// How the view behind a route becomes available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Rendered synchronously at navigation time.
    Eager,
    /// Fetched on demand; navigation shows a pending state until it resolves.
    Lazy,
}

impl LoadStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStrategy::Eager => "eager",
            LoadStrategy::Lazy => "lazy",
        }
    }
}

/// A single route entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    pub pattern: RoutePattern,
    pub view: ViewId,
    pub strategy: LoadStrategy,
}

impl Route {
    pub fn new(
        path: &str,
        name: impl Into<String>,
        view: ViewId,
        strategy: LoadStrategy,
    ) -> Result<Self, RouteError> {
        Ok(Self {
            name: name.into(),
            pattern: RoutePattern::parse(path)?,
            view,
            strategy,
        })
    }

    pub fn eager(path: &str, name: impl Into<String>, view: ViewId) -> Result<Self, RouteError> {
        Self::new(path, name, view, LoadStrategy::Eager)
    }

    pub fn lazy(path: &str, name: impl Into<String>, view: ViewId) -> Result<Self, RouteError> {
        Self::new(path, name, view, LoadStrategy::Lazy)
    }
}

/// Immutable, validated set of routes ordered most-specific first.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// The application's route table.
    pub fn default_routes() -> Result<Self, RouteError> {
        Self::builder()
            .route(Route::eager("/", "HomePage", ViewId::Home)?)
            .route(Route::lazy("/watch/:id", "VideoPlayerPage", ViewId::VideoPlayer)?)
            .route(Route::lazy("/upload", "UploadPage", ViewId::Upload)?)
            .route(Route::lazy("/gallery", "GalleryPage", ViewId::Gallery)?)
            .route(Route::eager("/login", "LoginPage", ViewId::Login)?)
            .route(Route::eager("/*path", "NotFound", ViewId::NotFound)?)
            .build()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Collects routes and validates them into a [`RouteTable`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Validate and freeze.
    ///
    /// Fails on the first duplicate name or colliding pattern pair. On
    /// success routes are stably sorted by specificity, so first match wins.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        let mut names = HashSet::new();
        for route in &self.routes {
            if !names.insert(route.name.as_str()) {
                return Err(RouteError::DuplicateName {
                    name: route.name.clone(),
                });
            }
        }

        for (i, a) in self.routes.iter().enumerate() {
            if let Some(b) = self.routes[i + 1..]
                .iter()
                .find(|b| a.pattern.collides_with(&b.pattern))
            {
                return Err(RouteError::Collision {
                    first: a.pattern.to_string(),
                    second: b.pattern.to_string(),
                });
            }
        }

        let mut routes = self.routes;
        routes.sort_by(|a, b| a.pattern.specificity_cmp(&b.pattern));
        Ok(RouteTable { routes })
    }
}
