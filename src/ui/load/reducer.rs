//! Reducer for the view load state.

use crate::mvi::Reducer;

use super::intent::LoadIntent;
use super::state::ViewLoadState;

/// Pure transitions. Spawning the loader is the caller's job after a
/// transition into `Pending`.
pub struct LoadReducer;

impl Reducer for LoadReducer {
    type State = ViewLoadState;
    type Intent = LoadIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadIntent::Show { generation, page } => ViewLoadState::Resolved { generation, page },

            LoadIntent::Start { request } => ViewLoadState::Pending { request },

            LoadIntent::Loaded { generation, page } => match state {
                ViewLoadState::Pending { request } if request.generation == generation => {
                    ViewLoadState::Resolved { generation, page }
                }
                other => {
                    tracing::debug!(generation, "Dropping stale view load");
                    other
                }
            },

            LoadIntent::Failed {
                generation,
                message,
            } => match state {
                ViewLoadState::Pending { request } if request.generation == generation => {
                    ViewLoadState::Failed { request, message }
                }
                other => {
                    tracing::debug!(generation, "Dropping stale view load failure");
                    other
                }
            },

            LoadIntent::Retry { generation } => match state {
                ViewLoadState::Failed { mut request, .. } => {
                    request.generation = generation;
                    ViewLoadState::Pending { request }
                }
                other => other,
            },
        }
    }
}
