use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{default_true, null_default, null_true};

/// A gallery entry (video, infographic or photo)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: i64,
    /// `"video"` or `"image"`
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub media_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(default = "default_true", deserialize_with = "null_true")]
    pub is_active: bool,
}

impl MediaItem {
    /// Uploaded file first, external URL otherwise.
    pub fn content_url(&self) -> Option<&str> {
        self.file.as_deref().or(self.url.as_deref())
    }

    pub fn thumbnail_url(&self) -> Option<String> {
        if let Some(thumbnail) = self.thumbnail.as_deref().filter(|t| !t.trim().is_empty()) {
            return Some(thumbnail.to_string());
        }
        if self.media_type == "image" {
            return self.content_url().map(str::to_string);
        }
        if self.media_type == "video" {
            return self
                .url
                .as_deref()
                .and_then(youtube_video_id)
                .map(|id| format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", id));
        }
        None
    }
}

/// Extract the video id from `watch?v=`, `youtu.be/` and `embed/` links.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    const MARKERS: [&str; 3] = ["youtube.com/watch?v=", "youtu.be/", "youtube.com/embed/"];

    MARKERS.iter().find_map(|marker| {
        let start = url.find(marker)? + marker.len();
        let rest = &url[start..];
        let end = rest
            .find(|c: char| c == '&' || c == '?' || c.is_whitespace())
            .unwrap_or(rest.len());
        let id = &rest[..end];
        (!id.is_empty()).then_some(id)
    })
}

/// JSON payload for creating a link-based gallery entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMediaRequest {
    #[serde(rename = "type")]
    pub media_type: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub thumbnail: Option<String>,
    pub author: String,
    pub category: String,
}

/// A gallery entry backed by local files, sent as multipart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpload {
    pub media_type: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub category: String,
    pub file: PathBuf,
    pub thumbnail: Option<PathBuf>,
}
