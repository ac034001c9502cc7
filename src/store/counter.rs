//! Click counter slice.

use crate::mvi::{Intent, Reducer, UiState};

pub const DEFAULT_CLICK_COUNTER: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    pub click_counter: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            click_counter: DEFAULT_CLICK_COUNTER,
        }
    }
}

impl UiState for CounterState {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    /// Already-validated counter value.
    Set(i64),
}

impl Intent for CounterIntent {}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Set(click_counter) => CounterState { click_counter },
        }
    }
}

/// Parse raw counter input. Surrounding whitespace is ignored; anything
/// that is not a base-10 integer is rejected.
pub fn parse_counter(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}
