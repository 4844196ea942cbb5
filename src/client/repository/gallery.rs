/**
 * Gallery Repository
 *
 * Public gallery listing and authenticated media creation, either by URL
 * (`gallery/create/`) or by multipart upload of a local file with an
 * optional thumbnail (`gallery/upload/`).
 */

use std::path::Path;

use serde_json::Value;

use crate::client::api::envelope::{unwrap_envelope, GalleryResponse, MediaResponse};
use crate::client::api::{endpoints, Endpoint, FormPart, RequestBody};
use crate::client::repository::{settle, Gateway};
use crate::shared::models::{CreateMediaRequest, MediaItem, MediaUpload};
use crate::shared::{ClientError, Outcome};

const GALLERY_FALLBACK: &str = "Error del backend al obtener la galería";
const CREATE_MEDIA_FALLBACK: &str = "Error al crear el ítem";
const UPLOAD_FALLBACK: &str = "Error al subir el archivo";
const UNREADABLE_FILE: &str = "No se pudo leer el archivo seleccionado";

#[derive(Debug, Clone)]
pub struct GalleryRepository {
    gateway: Gateway,
}

impl GalleryRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Public listing; works without a session.
    pub async fn gallery_items(&self) -> Outcome<Vec<MediaItem>> {
        let result = self
            .gateway
            .fetch::<GalleryResponse>(&endpoints::gallery(), RequestBody::Empty, GALLERY_FALLBACK)
            .await;
        settle("gallery_items", result)
    }

    pub async fn create_media_item(&self, request: &CreateMediaRequest) -> Outcome<MediaItem> {
        let result = async {
            let body = RequestBody::json(request)?;
            self.send_media(&endpoints::create_media(), body, CREATE_MEDIA_FALLBACK)
                .await
        }
        .await;
        settle("create_media_item", result)
    }

    /// Upload a local file. An unreadable thumbnail is skipped; an unreadable
    /// main file fails before anything is sent.
    pub async fn upload_media_item(&self, upload: &MediaUpload) -> Outcome<MediaItem> {
        settle("upload_media_item", self.try_upload(upload).await)
    }

    async fn try_upload(&self, upload: &MediaUpload) -> Result<MediaItem, ClientError> {
        // Checked up front so no file is read for a request that cannot be sent.
        self.gateway.token()?;

        let file = read_part("file", &upload.file).await.map_err(|e| {
            tracing::warn!("Cannot read {}: {}", upload.file.display(), e);
            ClientError::File(UNREADABLE_FILE.to_string())
        })?;

        let thumbnail = match &upload.thumbnail {
            Some(path) => match read_part("thumbnail", path).await {
                Ok(part) => Some(part),
                Err(e) => {
                    tracing::warn!("Skipping thumbnail {}: {}", path.display(), e);
                    None
                }
            },
            None => None,
        };

        let mut parts = vec![
            FormPart::text("type", upload.media_type.as_str()),
            FormPart::text("title", upload.title.as_str()),
            FormPart::text("description", upload.description.as_str()),
            FormPart::text("author", upload.author.as_str()),
            FormPart::text("category", upload.category.as_str()),
            file,
        ];
        parts.extend(thumbnail);

        self.send_media(&endpoints::upload_media(), RequestBody::Multipart(parts), UPLOAD_FALLBACK)
            .await
    }

    /// Media endpoints answer with either the bare item or a success-flagged
    /// wrapper.
    async fn send_media(
        &self,
        endpoint: &Endpoint,
        body: RequestBody,
        fallback: &str,
    ) -> Result<MediaItem, ClientError> {
        let value = self.gateway.fetch_raw(endpoint, body).await?;
        let item = if is_wrapped(&value) {
            unwrap_envelope(serde_json::from_value::<MediaResponse>(value)?, fallback)?
        } else {
            serde_json::from_value::<MediaItem>(value)?
        };
        tracing::info!("Media item {} saved ({})", item.id, item.media_type);
        Ok(item)
    }
}

fn is_wrapped(value: &Value) -> bool {
    value.as_object().is_some_and(|object| object.contains_key("success"))
}

async fn read_part(name: &str, path: &Path) -> std::io::Result<FormPart> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    Ok(FormPart::File {
        name: name.to_string(),
        mime: mime_for(path).to_string(),
        file_name,
        bytes,
    })
}

/// Content type from the file extension
pub(crate) fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
