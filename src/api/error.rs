//! Errors returned by the API client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base URL '{url}'")]
    InvalidBaseUrl { url: String },

    #[error("Invalid video id '{id}'")]
    InvalidId { id: String },

    #[error("Not logged in")]
    MissingCredentials,

    #[error("Credentials rejected by the API")]
    Unauthorized,

    #[error("Not found: {path}")]
    NotFound { path: String },

    #[error("API returned {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Short message suitable for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } | ApiError::Client(_) => "API client misconfigured",
            ApiError::InvalidId { .. } => "Invalid video id",
            ApiError::MissingCredentials => "Please log in first",
            ApiError::Unauthorized => "Wrong username or password",
            ApiError::NotFound { .. } => "Not found",
            ApiError::Status { .. } => "The server returned an error",
            ApiError::Transport { .. } => "Cannot reach the server",
            ApiError::Decode { .. } => "Unexpected server response",
            ApiError::Io { .. } => "Cannot read file",
        }
    }
}
