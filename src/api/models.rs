//! Wire types of the backend video API.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Processing status of a video, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VideoStatus {
    Unspecified,
    Uploading,
    Uploaded,
    Encoding,
    Complete,
    #[default]
    Unknown,
    FailUpload,
    FailEncode,
    Archive,
}

impl VideoStatus {
    pub fn as_wire(&self) -> &'static str {
        match self {
            VideoStatus::Unspecified => "VIDEO_STATUS_UNSPECIFIED",
            VideoStatus::Uploading => "VIDEO_STATUS_UPLOADING",
            VideoStatus::Uploaded => "VIDEO_STATUS_UPLOADED",
            VideoStatus::Encoding => "VIDEO_STATUS_ENCODING",
            VideoStatus::Complete => "VIDEO_STATUS_COMPLETE",
            VideoStatus::Unknown => "VIDEO_STATUS_UNKNOWN",
            VideoStatus::FailUpload => "VIDEO_STATUS_FAIL_UPLOAD",
            VideoStatus::FailEncode => "VIDEO_STATUS_FAIL_ENCODE",
            VideoStatus::Archive => "VIDEO_STATUS_ARCHIVE",
        }
    }

    /// Parse a wire value. Unrecognized strings map to `Unknown`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "VIDEO_STATUS_UNSPECIFIED" => VideoStatus::Unspecified,
            "VIDEO_STATUS_UPLOADING" => VideoStatus::Uploading,
            "VIDEO_STATUS_UPLOADED" => VideoStatus::Uploaded,
            "VIDEO_STATUS_ENCODING" => VideoStatus::Encoding,
            "VIDEO_STATUS_COMPLETE" => VideoStatus::Complete,
            "VIDEO_STATUS_FAIL_UPLOAD" => VideoStatus::FailUpload,
            "VIDEO_STATUS_FAIL_ENCODE" => VideoStatus::FailEncode,
            "VIDEO_STATUS_ARCHIVE" => VideoStatus::Archive,
            _ => VideoStatus::Unknown,
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            VideoStatus::Unspecified => "unspecified",
            VideoStatus::Uploading => "uploading",
            VideoStatus::Uploaded => "uploaded",
            VideoStatus::Encoding => "encoding",
            VideoStatus::Complete => "ready",
            VideoStatus::Unknown => "unknown",
            VideoStatus::FailUpload => "upload failed",
            VideoStatus::FailEncode => "encoding failed",
            VideoStatus::Archive => "archived",
        }
    }

    pub fn is_playable(&self) -> bool {
        matches!(self, VideoStatus::Complete)
    }
}

impl From<String> for VideoStatus {
    fn from(value: String) -> Self {
        VideoStatus::from_wire(&value)
    }
}

impl From<VideoStatus> for String {
    fn from(status: VideoStatus) -> Self {
        status.as_wire().to_string()
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A video entry as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: VideoStatus,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One page of the video list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(rename = "_lastpage", default)]
    pub last_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub title: String,
    #[serde(default)]
    pub upload_date_unix: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStatusResponse {
    pub status: VideoStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub method: String,
}

/// Response of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub video: Video,
    #[serde(rename = "_links", default)]
    pub links: std::collections::BTreeMap<String, Link>,
}

/// A video transformer service available to the encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformerService {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransformerList {
    #[serde(default)]
    pub services: Vec<TransformerService>,
}

/// Sort attribute of the video list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAttribute {
    #[default]
    Title,
    UploadedAt,
    CreatedAt,
    UpdatedAt,
}

impl SortAttribute {
    pub fn as_path(&self) -> &'static str {
        match self {
            SortAttribute::Title => "title",
            SortAttribute::UploadedAt => "uploadedat",
            SortAttribute::CreatedAt => "createdat",
            SortAttribute::UpdatedAt => "updatedat",
        }
    }
}

/// Parameters of a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub attribute: SortAttribute,
    pub ascending: bool,
    /// 1-based page index.
    pub page: u32,
    pub limit: u32,
    pub status: VideoStatus,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            attribute: SortAttribute::Title,
            ascending: true,
            page: 1,
            limit: 20,
            status: VideoStatus::Complete,
        }
    }
}

impl ListQuery {
    pub fn path(&self) -> String {
        format!(
            "/api/v1/videos/list/{}/{}/{}/{}/{}",
            self.attribute.as_path(),
            if self.ascending { "asc" } else { "desc" },
            self.page.max(1),
            self.limit.max(1),
            self.status.as_wire(),
        )
    }
}

/// Video file plus metadata to upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub title: String,
    pub file_name: String,
    pub video: Vec<u8>,
    pub cover: Option<(String, Vec<u8>)>,
}

impl UploadRequest {
    /// Read the video and optional cover image from disk.
    pub async fn from_files(
        title: impl Into<String>,
        video: &Path,
        cover: Option<&Path>,
    ) -> Result<Self, ApiError> {
        let (file_name, video) = read_file(video).await?;
        let cover = match cover {
            Some(path) => Some(read_file(path).await?),
            None => None,
        };
        Ok(Self {
            title: title.into(),
            file_name,
            video,
            cover,
        })
    }
}

async fn read_file(path: &Path) -> Result<(String, Vec<u8>), ApiError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok((name, bytes))
}
