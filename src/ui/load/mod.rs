//! Lazy view load feature module.
//!
//! Tracks the page behind the current navigation: shown at once for eager
//! routes, pending until the loader answers for lazy ones.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Load state enum (Idle → Pending → Resolved | Failed)
//! - `intent.rs` - Navigation and loader events
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::LoadIntent;
pub use reducer::LoadReducer;
pub use state::ViewLoadState;
