//! Terminal front-end.
//!
//! # Data Flow
//! ```text
//! crossterm events ──► EventHandler ──► App (router, store, load state)
//!                                          │ AppEffect
//!                                          ▼
//!                     AppEvent ◄── EffectRunner (tokio: loader, API)
//! ```
//!
//! All app state is touched only on the UI thread. Async work reports back
//! through the event channel, tagged with the navigation generation.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod layout;
pub mod load;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
