//! User management integration tests

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use lengua_client::shared::models::CreateUserRequest;

use crate::common::{user_json, TestBackend};

fn request(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: None,
        email: email.to_string(),
        password: "secreto123".to_string(),
        first_name: "Luis".to_string(),
        last_name: "Quispe".to_string(),
        role: "student".to_string(),
        assigned_block: Some("B1 Azul".to_string()),
        specialization: None,
        personal_email: None,
    }
}

#[tokio::test]
async fn test_create_user_field_errors() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("auth/register/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errors": {"email": ["ya existe"]}
        })))
        .mount(&backend.server)
        .await;

    let outcome = backend.users().create_user(&request("luis@lengua.test")).await;

    assert_eq!(outcome.error_message(), Some("email: ya existe"));
}

#[tokio::test]
async fn test_create_user_field_errors_on_bad_request() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("auth/register/")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "errors": {
                "password": ["muy corta", "muy común"],
                "email": ["inválido"]
            }
        })))
        .mount(&backend.server)
        .await;

    let outcome = backend.users().create_user(&request("luis")).await;

    assert_eq!(
        outcome.error_message(),
        Some("email: inválido\npassword: muy corta, muy común")
    );
}

#[tokio::test]
async fn test_create_user_sends_spanish_keys() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("auth/register/")))
        .and(body_partial_json(json!({
            "email": "luis@lengua.test",
            "bloque_asignado": "B1 Azul"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"success": true, "user": user_json(12, "luis")})),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let user = backend.users().create_user(&request("luis@lengua.test")).await.ok().unwrap();

    assert_eq!(user.id, 12);
}

#[tokio::test]
async fn test_users_accept_bare_array() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("users/")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([user_json(1, "ana"), user_json(2, "luis")])),
        )
        .mount(&backend.server)
        .await;

    let users = backend.users().users().await.ok().unwrap();

    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["ana", "luis"]);
}

#[tokio::test]
async fn test_users_accept_wrapped_list() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("users/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": [user_json(1, "ana")]})),
        )
        .mount(&backend.server)
        .await;

    let users = backend.users().users().await.ok().unwrap();

    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_toggle_user_active() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("users/12/toggle-active/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&backend.server)
        .await;

    assert!(backend.users().toggle_user_active(12).await.is_success());
}

#[tokio::test]
async fn test_specializations() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("especializaciones/activas/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": 1, "nombre": "Business", "descripcion": "Inglés de negocios", "precio_adicional": "50.00", "activa": true}]
        })))
        .mount(&backend.server)
        .await;

    let specializations = backend.form_data().specializations().await.ok().unwrap();

    assert_eq!(specializations[0].name, "Business");
    assert_eq!(specializations[0].extra_price.as_deref(), Some("50.00"));
}
