//! Reducer primitives shared by the store slices and the view load state.
//!
//! ```text
//! mutation / load event ──→ Reducer::reduce ──→ next state ──→ render
//! ```
//!
//! Reducers never perform I/O. Anything asynchronous (API calls, lazy view
//! loads) happens outside and comes back as a new intent.

/// A state slice. Cheap to clone and compare so renders can skip unchanged
/// snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// An input to a reducer: a named mutation or an async result.
pub trait Intent: Send + 'static {}

/// Pure transition `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
