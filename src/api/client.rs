use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::error::ApiError;
use super::models::{
    ListQuery, TransformerList, TransformerService, UploadRequest, UploadResponse, VideoInfo,
    VideoList, VideoStatus, VideoStatusResponse,
};
use crate::config::ApiConfig;

/// HTTP Basic credentials for `/api/v1`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Typed client over the video API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
            });
        }

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.request_timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url,
            credentials: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Copy of this client authenticating with `credentials`.
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
            ..self.clone()
        }
    }

    /// Copy of this client with credentials dropped.
    pub fn without_credentials(&self) -> Self {
        Self {
            credentials: None,
            ..self.clone()
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// `GET /health`. Does not require credentials.
    pub async fn health(&self) -> Result<(), ApiError> {
        let path = "/health";
        let response = self.send(self.http.get(self.url(path)), path).await?;
        check_status(response, path).map(drop)
    }

    /// Verify the configured credentials with the cheapest authenticated call.
    pub async fn check_credentials(&self) -> Result<(), ApiError> {
        let query = ListQuery {
            limit: 1,
            ..ListQuery::default()
        };
        self.list_videos(&query).await.map(drop)
    }

    pub async fn list_videos(&self, query: &ListQuery) -> Result<VideoList, ApiError> {
        self.get_json(&query.path()).await
    }

    pub async fn video_info(&self, id: &str) -> Result<VideoInfo, ApiError> {
        let path = format!("/api/v1/videos/{}/info", validate_id(id)?);
        self.get_json(&path).await
    }

    pub async fn video_status(&self, id: &str) -> Result<VideoStatus, ApiError> {
        let path = format!("/api/v1/videos/{}/status", validate_id(id)?);
        let response: VideoStatusResponse = self.get_json(&path).await?;
        Ok(response.status)
    }

    /// HLS master playlist URL of a video.
    pub fn stream_url(&self, id: &str) -> Result<String, ApiError> {
        Ok(self.url(&format!(
            "/api/v1/videos/{}/streams/master.m3u8",
            validate_id(id)?
        )))
    }

    pub fn cover_url(&self, id: &str) -> Result<String, ApiError> {
        Ok(self.url(&format!("/api/v1/videos/{}/cover", validate_id(id)?)))
    }

    pub async fn transformers(&self) -> Result<Vec<TransformerService>, ApiError> {
        let list: TransformerList = self.get_json("/api/v1/videos/transformer/list").await?;
        Ok(list.services)
    }

    pub async fn upload(&self, upload: UploadRequest) -> Result<UploadResponse, ApiError> {
        let path = "/api/v1/videos/upload";
        let mut form = Form::new().text("title", upload.title).part(
            "video",
            Part::bytes(upload.video).file_name(upload.file_name),
        );
        if let Some((name, bytes)) = upload.cover {
            form = form.part("cover", Part::bytes(bytes).file_name(name));
        }

        let request = self.authed(Method::POST, path)?.multipart(form);
        let response = check_status(self.send(request, path).await?, path)?;
        let created: UploadResponse = response.json().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })?;
        tracing::info!(video_id = %created.video.id, title = %created.video.title, "Video uploaded");
        Ok(created)
    }

    pub async fn delete_video(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/v1/videos/{}/delete", validate_id(id)?);
        self.action(Method::DELETE, &path).await
    }

    pub async fn archive_video(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/v1/videos/{}/archive", validate_id(id)?);
        self.action(Method::PUT, &path).await
    }

    pub async fn unarchive_video(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/v1/videos/{}/unarchive", validate_id(id)?);
        self.action(Method::PUT, &path).await
    }

    async fn action(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let request = self.authed(method.clone(), path)?;
        check_status(self.send(request, path).await?, path)?;
        tracing::info!(method = %method, path, "Video action completed");
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authed(Method::GET, path)?;
        let response = check_status(self.send(request, path).await?, path)?;
        response.json().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let credentials = self.credentials.as_ref().ok_or(ApiError::MissingCredentials)?;
        Ok(self
            .http
            .request(method, self.url(path))
            .header(AUTHORIZATION, credentials.authorization()))
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        tracing::debug!(path, "API request");
        request.send().await.map_err(|source| {
            tracing::warn!(path, error = %source, "API request failed");
            ApiError::Transport {
                path: path.to_string(),
                source,
            }
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn check_status(response: Response, path: &str) -> Result<Response, ApiError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound {
            path: path.to_string(),
        }),
        status => Err(ApiError::Status {
            status: status.as_u16(),
            path: path.to_string(),
        }),
    }
}

/// Video ids are UUIDs; anything else never reaches the network.
fn validate_id(id: &str) -> Result<&str, ApiError> {
    match Uuid::parse_str(id) {
        Ok(_) => Ok(id),
        Err(_) => Err(ApiError::InvalidId { id: id.to_string() }),
    }
}
