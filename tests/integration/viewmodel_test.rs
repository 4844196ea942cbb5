//! View-model integration tests
//!
//! State transitions observed through the watch streams, with a mock backend
//! behind the repositories.

use std::time::Duration;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use lengua_client::client::navigation::Destination;
use lengua_client::client::viewmodel::{
    AdminBlocksViewModel, CreateUserViewModel, EvaluationsViewModel, GalleryViewModel,
    LoginViewModel, ProfileViewModel, ScheduleClassViewModel,
};
use lengua_client::client::{SessionStore, UiState};
use lengua_client::shared::models::CreateUserRequest;

use crate::common::{block_json, evaluation_json, media_json, user_json, TestBackend};

#[tokio::test]
async fn test_login_view_model_routes_by_role() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("login/")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "tok-prof", "role": "profesor"})),
        )
        .mount(&backend.server)
        .await;

    let view_model = LoginViewModel::new(backend.auth());
    let state = view_model.state();
    assert_eq!(view_model.destination(), Destination::Login);

    assert!(view_model.login("rosa", "clave").await);

    assert_matches!(&*state.borrow(), UiState::Success(outcome) if outcome.token == "tok-prof");
    assert_eq!(view_model.destination(), Destination::TeacherDashboard);
}

#[tokio::test]
async fn test_login_view_model_requires_fields() {
    let backend = TestBackend::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend.server)
        .await;

    let view_model = LoginViewModel::new(backend.auth());

    assert!(!view_model.login("  ", "clave").await);
    assert!(view_model.state().borrow().error().is_some());
}

#[tokio::test]
async fn test_spawned_load_reaches_success() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("evaluations/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([evaluation_json(1, "Quiz 1")])))
        .mount(&backend.server)
        .await;

    let view_model = EvaluationsViewModel::new(backend.auth());
    let mut state = view_model.evaluations();
    view_model.spawn_load_evaluations();

    let settled = tokio::time::timeout(
        Duration::from_secs(5),
        state.wait_for(|s| !s.is_idle() && !s.is_loading()),
    )
    .await
    .unwrap()
    .unwrap()
    .clone();

    assert_matches!(settled, UiState::Success(evaluations) if evaluations.len() == 1);
}

#[tokio::test]
async fn test_profile_view_model_logout_clears_session() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("auth/profile/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "user": user_json(7, "ana")})),
        )
        .mount(&backend.server)
        .await;

    let view_model = ProfileViewModel::new(backend.auth());
    assert!(view_model.load_profile().await);
    assert!(view_model.profile().borrow().value().is_some());

    assert!(view_model.logout());
    assert_eq!(backend.session.get(), None);
    assert!(view_model.profile().borrow().is_idle());

    assert!(!view_model.load_profile().await);
    assert_eq!(
        view_model.profile().borrow().error(),
        Some("No hay token de autenticación")
    );
}

#[tokio::test]
async fn test_create_user_view_model_loads_form_data_and_reloads_users() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("bloques/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "total": 1, "bloques": [block_json(1, "Azul", "B1")]
        })))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("especializaciones/activas/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("auth/register/")))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"success": true, "user": user_json(12, "luis")})),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("users/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(12, "luis")])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let view_model = CreateUserViewModel::new(backend.users(), backend.form_data());

    // One failing lookup does not hold back the other.
    assert!(!view_model.load_form_data().await);
    assert!(view_model.blocks().borrow().value().is_some());
    assert_eq!(
        view_model.specializations().borrow().error(),
        Some("Error al obtener especializaciones")
    );

    let request = CreateUserRequest {
        username: Some("luis".to_string()),
        email: "luis@lengua.test".to_string(),
        password: "secreto123".to_string(),
        first_name: "Luis".to_string(),
        last_name: "Quispe".to_string(),
        role: "student".to_string(),
        assigned_block: None,
        specialization: None,
        personal_email: None,
    };
    assert!(view_model.create_user(request).await);
    assert_eq!(view_model.users().borrow().value().map(Vec::len), Some(1));

    view_model.reset_create_state();
    assert!(view_model.create_state().borrow().is_idle());
}

#[tokio::test]
async fn test_admin_blocks_view_model_groups_and_reloads() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("bloques/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "total": 3,
            "bloques": [
                block_json(1, "Azul", "B1"),
                block_json(2, "Rojo", "A2"),
                block_json(3, "Verde", "B1")
            ]
        })))
        .expect(2)
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("bloques/3/delete/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let view_model = AdminBlocksViewModel::new(backend.auth(), backend.blocks());
    assert!(view_model.load_blocks().await);

    let levels: Vec<String> = view_model
        .blocks()
        .borrow()
        .value()
        .map(|grouped| grouped.keys().cloned().collect())
        .unwrap_or_default();
    assert_eq!(levels, vec!["A2".to_string(), "B1".to_string()]);

    let selected = view_model.blocks().borrow().value().unwrap()["B1"][1].clone();
    view_model.select_block(selected);
    assert_eq!(view_model.selected_block().borrow().as_ref().map(|b| b.id), Some(3));

    assert!(view_model.delete_block(3).await);
    assert!(view_model.selected_block().borrow().is_none());
    assert_matches!(&*view_model.action_state().borrow(), UiState::Success(()));
}

#[tokio::test]
async fn test_gallery_view_model_reloads_after_create() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("gallery/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "total": 1, "items": [media_json(1, "Graduación")]
        })))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("gallery/create/")))
        .respond_with(ResponseTemplate::new(201).set_body_json(media_json(1, "Graduación")))
        .mount(&backend.server)
        .await;

    let view_model = GalleryViewModel::new(backend.gallery());
    let request = lengua_client::shared::models::CreateMediaRequest {
        media_type: "image".to_string(),
        title: "Graduación".to_string(),
        description: String::new(),
        url: Some("https://cdn.lengua.test/grad.jpg".to_string()),
        thumbnail: None,
        author: "Ana".to_string(),
        category: "eventos".to_string(),
    };

    assert!(view_model.create_media_item(request).await);
    assert_eq!(view_model.items().borrow().value().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_schedule_view_model_dropped_mid_flight() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("professors/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "professors": []}))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("students/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "students": []}))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&backend.server)
        .await;

    let view_model = ScheduleClassViewModel::new(backend.schedule());
    let professors = view_model.professors();
    view_model.spawn_load_people();
    tokio::time::sleep(Duration::from_millis(50)).await;

    drop(view_model);
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(professors.borrow().value().is_none());
}

#[tokio::test]
async fn test_create_user_view_model_shows_rejected_toggle() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("users/12/toggle-active/")))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"success": false, "message": "No puedes desactivarte"})),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(TestBackend::path("users/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&backend.server)
        .await;

    let view_model = CreateUserViewModel::new(backend.users(), backend.form_data());

    assert!(!view_model.toggle_user_active(12).await);
    assert_eq!(
        view_model.action_state().borrow().error(),
        Some("No puedes desactivarte")
    );
    assert!(view_model.users().borrow().is_idle());
}

#[tokio::test]
async fn test_schedule_view_model_accepts_bare_acknowledgement() {
    let backend = TestBackend::signed_in().await;
    Mock::given(method("POST"))
        .and(path(TestBackend::path("classes/create/")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Clase creada exitosamente"
        })))
        .mount(&backend.server)
        .await;

    let view_model = ScheduleClassViewModel::new(backend.schedule());

    assert!(view_model.create_class(Default::default()).await);
    assert_eq!(*view_model.create_state().borrow(), UiState::Success(None));
}
