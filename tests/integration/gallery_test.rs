//! Gallery integration tests: public listing, creation and multipart upload

use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

use lengua_client::shared::models::{CreateMediaRequest, MediaUpload};

use crate::common::{media_json, TestBackend};

fn upload(dir: &TempDir, thumbnail: Option<&str>) -> MediaUpload {
    MediaUpload {
        media_type: "image".to_string(),
        title: "Fiesta de fin de curso".to_string(),
        description: "Fotos del evento".to_string(),
        author: "Ana".to_string(),
        category: "eventos".to_string(),
        file: dir.path().join("fiesta.jpg"),
        thumbnail: thumbnail.map(|name| dir.path().join(name)),
    }
}

#[tokio::test]
async fn test_gallery_is_public() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("gallery/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "total": 1,
            "items": [media_json(1, "Graduación")]
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let items = backend.gallery().gallery_items().await.ok().unwrap();

    assert_eq!(items[0].title, "Graduación");
    assert_eq!(items[0].thumbnail_url().as_deref(), Some("/media/1.jpg"));
    let requests = backend.server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_create_media_accepts_bare_item() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("gallery/create/")))
        .respond_with(ResponseTemplate::new(201).set_body_json(media_json(5, "Video")))
        .mount(&backend.server)
        .await;

    let request = CreateMediaRequest {
        media_type: "video".to_string(),
        title: "Video".to_string(),
        description: String::new(),
        url: Some("https://youtu.be/abc123XYZ".to_string()),
        thumbnail: None,
        author: "Rosa".to_string(),
        category: "clases".to_string(),
    };
    let item = backend.gallery().create_media_item(&request).await.ok().unwrap();

    assert_eq!(item.id, 5);
}

#[tokio::test]
async fn test_create_media_field_errors() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("gallery/create/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errors": {"title": ["Este campo es obligatorio."]}
        })))
        .mount(&backend.server)
        .await;

    let request = CreateMediaRequest {
        media_type: "image".to_string(),
        title: String::new(),
        description: String::new(),
        url: None,
        thumbnail: None,
        author: String::new(),
        category: String::new(),
    };
    let outcome = backend.gallery().create_media_item(&request).await;

    assert_eq!(outcome.error_message(), Some("title: Este campo es obligatorio."));
}

#[tokio::test]
async fn test_upload_unreadable_file_sends_nothing() {
    let dir = TempDir::new().unwrap();
    let backend = TestBackend::signed_in().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend.server)
        .await;

    let outcome = backend.gallery().upload_media_item(&upload(&dir, None)).await;

    assert_eq!(outcome.error_message(), Some("No se pudo leer el archivo seleccionado"));
}

#[tokio::test]
async fn test_upload_skips_unreadable_thumbnail() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("fiesta.jpg"), b"jpeg-bytes").unwrap();

    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("gallery/upload/")))
        .respond_with(ResponseTemplate::new(201).set_body_json(media_json(9, "Fiesta de fin de curso")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let outcome = backend
        .gallery()
        .upload_media_item(&upload(&dir, Some("no-existe.png")))
        .await;

    assert_eq!(outcome.ok().map(|item| item.id), Some(9));

    let requests = backend.server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("filename=\"fiesta.jpg\""));
    assert!(body.contains("jpeg-bytes"));
    assert!(body.contains("Fiesta de fin de curso"));
    assert!(!body.contains("name=\"thumbnail\""));
}

#[tokio::test]
async fn test_upload_includes_thumbnail() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("fiesta.jpg"), b"jpeg-bytes").unwrap();
    std::fs::write(dir.path().join("mini.png"), b"png-bytes").unwrap();

    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("gallery/upload/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": media_json(10, "Fiesta")})),
        )
        .mount(&backend.server)
        .await;

    let outcome = backend.gallery().upload_media_item(&upload(&dir, Some("mini.png"))).await;

    assert!(outcome.is_success());
    let requests = backend.server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"thumbnail\""));
    assert!(body.contains("filename=\"mini.png\""));
    assert!(body.to_lowercase().contains("content-type: image/png"));
}
