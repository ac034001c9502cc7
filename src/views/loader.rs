//! Lazy page loading.
//!
//! A lazy route resolves synchronously to a [`LoadRequest`]; the page itself
//! comes from a [`ViewLoader`] running off the UI thread. Every navigation
//! issues a fresh request tagged with a new generation, nothing is cached.

use async_trait::async_trait;
use thiserror::Error;

use super::pages::{GalleryModel, Page, UploadModel, VideoPlayerModel};
use super::ViewId;
use crate::api::{ApiClient, ApiError, ListQuery, VideoStatus};
use crate::router::{Resolution, RouteParams};
use crate::store::Store;

/// A request to load the page behind a lazy route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Navigation generation that issued the request.
    pub generation: u64,
    pub view: ViewId,
    pub path: String,
    pub params: RouteParams,
}

impl LoadRequest {
    pub fn from_resolution(generation: u64, resolution: &Resolution) -> Self {
        Self {
            generation,
            view: resolution.view,
            path: resolution.path.clone(),
            params: resolution.params.clone(),
        }
    }

    fn param(&self, name: &str) -> Result<&str, LoadError> {
        self.params
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| LoadError::MissingParam {
                view: self.view,
                param: name.to_string(),
            })
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{view} is not loaded lazily")]
    NotLazy { view: ViewId },

    #[error("{view} needs route parameter '{param}'")]
    MissingParam { view: ViewId, param: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl LoadError {
    /// Message shown in the failed state.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Api(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

/// Produces lazy pages.
#[async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self, request: &LoadRequest) -> Result<Page, LoadError>;
}

/// Loads pages from the backend API.
#[derive(Clone, Debug)]
pub struct ApiViewLoader {
    api: ApiClient,
    store: Store,
    page_size: u32,
}

impl ApiViewLoader {
    pub fn new(api: ApiClient, store: Store, page_size: u32) -> Self {
        Self {
            api,
            store,
            page_size,
        }
    }

    async fn player(&self, request: &LoadRequest) -> Result<Page, LoadError> {
        let id = request.param("id")?;
        let (info, status) =
            tokio::try_join!(self.api.video_info(id), self.api.video_status(id))?;
        Ok(Page::VideoPlayer(VideoPlayerModel {
            id: id.to_string(),
            title: info.title,
            status,
            upload_date_unix: info.upload_date_unix,
            stream_url: self.api.stream_url(id)?,
        }))
    }

    async fn gallery(&self) -> Result<Page, LoadError> {
        let published = ListQuery {
            limit: self.page_size,
            ..ListQuery::default()
        };
        let list = self.api.list_videos(&published).await?;

        let archived = if self.store.state().session.is_logged_in {
            let query = ListQuery {
                status: VideoStatus::Archive,
                ..published.clone()
            };
            self.api.list_videos(&query).await?.videos
        } else {
            Vec::new()
        };

        Ok(Page::Gallery(GalleryModel {
            videos: list.videos,
            archived,
            page: published.page,
            last_page: list.last_page,
        }))
    }

    async fn upload(&self) -> Result<Page, LoadError> {
        let transformers = self.api.transformers().await?;
        Ok(Page::Upload(UploadModel {
            transformers: transformers.into_iter().map(|s| s.name).collect(),
        }))
    }
}

#[async_trait]
impl ViewLoader for ApiViewLoader {
    async fn load(&self, request: &LoadRequest) -> Result<Page, LoadError> {
        tracing::debug!(
            view = %request.view,
            path = %request.path,
            generation = request.generation,
            "Loading view"
        );
        match request.view {
            ViewId::VideoPlayer => self.player(request).await,
            ViewId::Gallery => self.gallery().await,
            ViewId::Upload => self.upload().await,
            view @ (ViewId::Home | ViewId::Login | ViewId::NotFound) => {
                Err(LoadError::NotLazy { view })
            }
        }
    }
}
