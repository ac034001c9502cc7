//! Client for the backend video API.
//!
//! The API lives outside this crate; this module only consumes it. All
//! `/api/v1` endpoints require HTTP Basic credentials.

mod client;
mod error;
mod models;

pub use client::{ApiClient, Credentials};
pub use error::ApiError;
pub use models::{
    Link, ListQuery, SortAttribute, TransformerList, TransformerService, UploadRequest,
    UploadResponse, Video, VideoInfo, VideoList, VideoStatus, VideoStatusResponse,
};
