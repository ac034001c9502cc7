//! State of the current view load.

use crate::mvi::UiState;
use crate::views::{LoadRequest, Page};

/// Load state machine of the mounted view.
///
/// Each lazy navigation starts a new `Pending` tagged with its generation;
/// only an answer carrying the same generation may leave it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewLoadState {
    /// Nothing navigated yet.
    #[default]
    Idle,

    /// Waiting for the loader.
    Pending { request: LoadRequest },

    /// Page available for rendering.
    Resolved { generation: u64, page: Page },

    /// The loader failed; the request is kept for retry.
    Failed { request: LoadRequest, message: String },
}

impl UiState for ViewLoadState {}

impl ViewLoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn page(&self) -> Option<&Page> {
        match self {
            Self::Resolved { page, .. } => Some(page),
            _ => None,
        }
    }

    /// Generation of the navigation this state belongs to.
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Pending { request } | Self::Failed { request, .. } => Some(request.generation),
            Self::Resolved { generation, .. } => Some(*generation),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ViewId;

    fn request(generation: u64) -> LoadRequest {
        LoadRequest {
            generation,
            view: ViewId::Gallery,
            path: "/gallery".to_string(),
            params: Default::default(),
        }
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(ViewLoadState::default(), ViewLoadState::Idle);
        assert_eq!(ViewLoadState::default().generation(), None);
    }

    #[test]
    fn generation_follows_request() {
        let pending = ViewLoadState::Pending {
            request: request(4),
        };
        assert!(pending.is_pending());
        assert_eq!(pending.generation(), Some(4));
        assert!(pending.page().is_none());
    }

    #[test]
    fn failed_exposes_message() {
        let failed = ViewLoadState::Failed {
            request: request(2),
            message: "Cannot reach the server".to_string(),
        };
        assert_eq!(failed.error(), Some("Cannot reach the server"));
    }
}
