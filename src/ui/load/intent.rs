//! Intents for the view load state.

use crate::mvi::Intent;
use crate::views::{LoadRequest, Page};

#[derive(Debug)]
pub enum LoadIntent {
    /// Navigation to an eager route: the page is ready immediately.
    Show { generation: u64, page: Page },

    /// Navigation to a lazy route: wait for the loader.
    Start { request: LoadRequest },

    /// The loader produced the page.
    Loaded { generation: u64, page: Page },

    /// The loader failed.
    Failed { generation: u64, message: String },

    /// Re-issue a failed load under a new generation.
    Retry { generation: u64 },
}

impl Intent for LoadIntent {}
