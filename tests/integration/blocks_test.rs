//! Block management integration tests

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use lengua_client::shared::models::BlockDraft;

use crate::common::{block_json, TestBackend};

#[tokio::test]
async fn test_block_detail() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("bloques/4/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "bloque": block_json(4, "Azul", "B1")})),
        )
        .mount(&backend.server)
        .await;

    let block = backend.blocks().block(4).await.ok().unwrap();

    assert_eq!(block.display_name(), "B1 Azul");
    assert_eq!(block.student_count, 4);
}

#[tokio::test]
async fn test_create_block_sends_defaults() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("bloques/create/")))
        .and(body_partial_json(json!({
            "nombre": "Verde",
            "nivel": "A2",
            "cupo_maximo": 20,
            "estado": "configurado"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"success": true, "bloque": block_json(8, "Verde", "A2")})),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let outcome = backend
        .blocks()
        .create_block(&BlockDraft::new("Verde", "A2", "#4CAF50"))
        .await;

    assert_eq!(outcome.ok().map(|b| b.id), Some(8));
}

#[tokio::test]
async fn test_update_block_uses_put() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("PUT"))
        .and(path(TestBackend::path("bloques/8/update/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "bloque": block_json(8, "Verde", "B1")})),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let outcome = backend
        .blocks()
        .update_block(8, &BlockDraft::new("Verde", "B1", "#4CAF50"))
        .await;

    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_delete_block_with_empty_body() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("bloques/8/delete/")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    assert!(backend.blocks().delete_block(8).await.is_success());
}

#[tokio::test]
async fn test_toggle_block_rejected() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("bloques/8/toggle/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&backend.server)
        .await;

    let outcome = backend.blocks().toggle_block(8).await;

    assert_eq!(outcome.error_message(), Some("Error al cambiar el estado del bloque"));
}
