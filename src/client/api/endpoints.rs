//! Remote operations exposed by the backend.
//!
//! Paths are relative to the configured base URL.

use reqwest::Method;

/// One remote operation: HTTP method, path and whether it needs a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub authenticated: bool,
}

impl Endpoint {
    fn protected(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            authenticated: true,
        }
    }

    fn public(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            authenticated: false,
        }
    }
}

pub fn login() -> Endpoint {
    Endpoint::public(Method::POST, "login/")
}

pub fn profile() -> Endpoint {
    Endpoint::protected(Method::GET, "auth/profile/")
}

pub fn update_profile() -> Endpoint {
    Endpoint::protected(Method::PUT, "profile/update/")
}

pub fn classes() -> Endpoint {
    Endpoint::protected(Method::GET, "classes/")
}

pub fn create_class() -> Endpoint {
    Endpoint::protected(Method::POST, "classes/create/")
}

/// Answers either `{success, evaluaciones}` or a bare array.
pub fn evaluations() -> Endpoint {
    Endpoint::protected(Method::GET, "evaluations/")
}

pub fn blocks() -> Endpoint {
    Endpoint::protected(Method::GET, "bloques/")
}

pub fn block(id: i64) -> Endpoint {
    Endpoint::protected(Method::GET, format!("bloques/{}/", id))
}

pub fn create_block() -> Endpoint {
    Endpoint::protected(Method::POST, "bloques/create/")
}

pub fn update_block(id: i64) -> Endpoint {
    Endpoint::protected(Method::PUT, format!("bloques/{}/update/", id))
}

pub fn toggle_block(id: i64) -> Endpoint {
    Endpoint::protected(Method::POST, format!("bloques/{}/toggle/", id))
}

pub fn delete_block(id: i64) -> Endpoint {
    Endpoint::protected(Method::POST, format!("bloques/{}/delete/", id))
}

pub fn specializations() -> Endpoint {
    Endpoint::protected(Method::GET, "especializaciones/activas/")
}

pub fn clubs() -> Endpoint {
    Endpoint::protected(Method::GET, "clubs/")
}

pub fn professors() -> Endpoint {
    Endpoint::protected(Method::GET, "professors/")
}

pub fn students() -> Endpoint {
    Endpoint::protected(Method::GET, "students/")
}

pub fn users() -> Endpoint {
    Endpoint::protected(Method::GET, "users/")
}

pub fn create_user() -> Endpoint {
    Endpoint::protected(Method::POST, "auth/register/")
}

pub fn toggle_user_active(id: i64) -> Endpoint {
    Endpoint::protected(Method::POST, format!("users/{}/toggle-active/", id))
}

/// The gallery is readable without a session.
pub fn gallery() -> Endpoint {
    Endpoint::public(Method::GET, "gallery/")
}

pub fn create_media() -> Endpoint {
    Endpoint::protected(Method::POST, "gallery/create/")
}

pub fn upload_media() -> Endpoint {
    Endpoint::protected(Method::POST, "gallery/upload/")
}
