//! Session/global store.
//!
//! Holds the cross-view UI state: the session slice (login flag, user) and
//! the click counter slice. The store is an explicit handle passed to
//! whatever needs it; cloning it shares the same state.
//!
//! Reads go through [`Store::state`] or a [`Store::subscribe`] receiver.
//! Writes go only through the named mutations, each backed by a pure
//! reducer. Invalid input is rejected with a [`MutationError`] and leaves the
//! state untouched.

mod counter;
mod session;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

pub use counter::{parse_counter, CounterIntent, CounterReducer, CounterState, DEFAULT_CLICK_COUNTER};
pub use session::{SessionIntent, SessionReducer, SessionState};

use crate::mvi::Reducer;

/// Full store snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub session: SessionState,
    pub counter: CounterState,
}

impl AppState {
    pub fn with_click_counter(click_counter: i64) -> Self {
        Self {
            session: SessionState::default(),
            counter: CounterState { click_counter },
        }
    }
}

/// The sanctioned ways to change [`AppState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetLogState(bool),
    SetUser(Option<String>),
    /// Raw, unvalidated counter input.
    SetClickCounter(String),
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetLogState(_) => "setLogState",
            Mutation::SetUser(_) => "setUser",
            Mutation::SetClickCounter(_) => "setClickCounter",
        }
    }
}

/// A mutation was rejected; the state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("setClickCounter rejected non-numeric input {input:?}")]
    NotNumeric { input: String },
}

/// Cloneable handle to the shared state.
#[derive(Clone)]
pub struct Store {
    tx: Arc<watch::Sender<AppState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("state", &*self.tx.borrow()).finish()
    }
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.tx.borrow().clone()
    }

    /// Receiver notified after every accepted mutation.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }

    /// Apply a mutation.
    pub fn commit(&self, mutation: Mutation) -> Result<(), MutationError> {
        let name = mutation.name();
        match mutation {
            Mutation::SetLogState(status) => {
                self.reduce_session(SessionIntent::SetLogState(status));
            }
            Mutation::SetUser(username) => {
                self.reduce_session(SessionIntent::SetUser(username));
            }
            Mutation::SetClickCounter(input) => {
                let Some(value) = parse_counter(&input) else {
                    tracing::warn!(mutation = name, input = %input, "Mutation rejected");
                    return Err(MutationError::NotNumeric { input });
                };
                self.tx.send_modify(|state| {
                    state.counter =
                        CounterReducer::reduce(std::mem::take(&mut state.counter), CounterIntent::Set(value));
                });
            }
        }
        tracing::debug!(mutation = name, "Mutation committed");
        Ok(())
    }

    /// `setLogState`: overwrite the login flag.
    pub fn set_log_state(&self, new_status: bool) {
        self.reduce_session(SessionIntent::SetLogState(new_status));
        tracing::debug!(mutation = "setLogState", new_status, "Mutation committed");
    }

    /// Record the logged-in user name.
    pub fn set_user(&self, username: Option<String>) {
        self.reduce_session(SessionIntent::SetUser(username));
    }

    /// `setClickCounter`: accept numeric input, reject anything else.
    pub fn set_click_counter(&self, value: &str) -> Result<i64, MutationError> {
        self.commit(Mutation::SetClickCounter(value.to_string()))?;
        Ok(self.tx.borrow().counter.click_counter)
    }

    fn reduce_session(&self, intent: SessionIntent) {
        self.tx.send_modify(|state| {
            state.session = SessionReducer::reduce(std::mem::take(&mut state.session), intent);
        });
    }
}
