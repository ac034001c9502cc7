//! View components and pages.
//!
//! # Architecture
//!
//! - `element.rs` - Inspectable element tree and selector queries
//! - `session.rs` - Login form and session status components
//! - `miniature.rs` - Video thumbnails with optional action buttons
//! - `pages.rs` - Page view-models the router mounts
//! - `loader.rs` - Async loading of lazy pages
//!
//! Components are pure: `render(props, context) -> Element`. A [`Mounted`]
//! component keeps its instance across prop updates so tests can change props
//! and observe the re-rendered tree without remounting.

pub mod element;
pub mod loader;
pub mod miniature;
pub mod pages;
pub mod session;

use std::fmt;

pub use element::{Element, Node, Selector, SelectorError};
pub use loader::{ApiViewLoader, LoadError, LoadRequest, ViewLoader};
pub use miniature::{Miniature, MiniatureProps, VideoAction, VideoMiniature, VideoMiniatureProps};
pub use pages::{
    GalleryModel, Interaction, Page, UploadField, UploadFormProps, UploadModel, VideoPlayerModel,
};
pub use session::{FormField, Session, SessionForm, SessionFormProps};

use crate::router::{RouteParams, Router};
use crate::store::{AppState, Store};

/// Views the route table can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    VideoPlayer,
    Upload,
    Gallery,
    Login,
    NotFound,
}

impl ViewId {
    pub fn name(&self) -> &'static str {
        match self {
            ViewId::Home => "HomePage",
            ViewId::VideoPlayer => "VideoPlayerPage",
            ViewId::Upload => "UploadPage",
            ViewId::Gallery => "GalleryPage",
            ViewId::Login => "LoginPage",
            ViewId::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a component may read while rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub state: AppState,
    pub router: Option<Router>,
}

impl RenderContext {
    pub fn new(state: AppState, router: Option<Router>) -> Self {
        Self { state, router }
    }

    /// Hash link to a named route. Falls back to the path built by hand when
    /// no router is wired in.
    pub fn href_for(&self, name: &str, params: &RouteParams, fallback: &str) -> String {
        match &self.router {
            Some(router) => router.href_for(name, params).unwrap_or_else(|err| {
                tracing::warn!(route = name, error = %err, "Cannot build link");
                format!("#{}", fallback)
            }),
            None => format!("#{}", fallback),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.session.is_logged_in
    }
}

/// A view component.
pub trait Component {
    type Props: Clone + PartialEq + Default;

    fn render(props: &Self::Props, context: &RenderContext) -> Element;
}

/// Optional wiring handed to a component when it is mounted.
#[derive(Debug, Clone, Default)]
pub struct MountOptions {
    pub store: Option<Store>,
    pub router: Option<Router>,
}

impl MountOptions {
    pub fn with_store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    fn context(&self) -> RenderContext {
        let state = self.store.as_ref().map(Store::state).unwrap_or_default();
        RenderContext::new(state, self.router.clone())
    }
}

/// A live component instance.
pub struct Mounted<C: Component> {
    props: C::Props,
    options: MountOptions,
    tree: Element,
    renders: usize,
}

impl<C: Component> Mounted<C> {
    pub fn mount(props: C::Props, options: MountOptions) -> Self {
        let tree = C::render(&props, &options.context());
        Self {
            props,
            options,
            tree,
            renders: 1,
        }
    }

    /// Mount with default props and no store or router.
    pub fn shallow() -> Self {
        Self::mount(C::Props::default(), MountOptions::default())
    }

    pub fn props(&self) -> &C::Props {
        &self.props
    }

    /// Replace props and re-render in place. Equal props skip the render.
    pub fn set_props(&mut self, props: C::Props) {
        if props == self.props {
            return;
        }
        self.props = props;
        self.rerender();
    }

    /// Update props through a closure.
    pub fn update_props(&mut self, update: impl FnOnce(&mut C::Props)) {
        let mut props = self.props.clone();
        update(&mut props);
        self.set_props(props);
    }

    /// Re-render against the current store state.
    pub fn rerender(&mut self) {
        self.tree = C::render(&self.props, &self.options.context());
        self.renders += 1;
    }

    pub fn tree(&self) -> &Element {
        &self.tree
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn find(&self, selector: &str) -> Option<&Element> {
        self.tree.find(selector)
    }

    pub fn exists(&self, selector: &str) -> bool {
        self.tree.exists(selector)
    }

    pub fn text(&self) -> String {
        self.tree.text_content()
    }
}
