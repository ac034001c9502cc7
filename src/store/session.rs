//! Session slice: login flag and the logged-in user name.

use crate::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub is_logged_in: bool,
    /// Display name of the logged-in user, if known.
    pub username: Option<String>,
}

impl UiState for SessionState {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIntent {
    /// `setLogState`: overwrite the login flag as-is.
    SetLogState(bool),
    SetUser(Option<String>),
}

impl Intent for SessionIntent {}

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SetLogState(is_logged_in) => SessionState {
                is_logged_in,
                ..state
            },
            SessionIntent::SetUser(username) => SessionState { username, ..state },
        }
    }
}
