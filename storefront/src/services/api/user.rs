//! # User Endpoints
//!
//! Login, registration, existence checks, profile and password changes.

use serde_json::json;
use shared::{PasswordChange, ProfileUpdate};

use super::{encode_segment, ApiRequest, Envelope};
use crate::core::error::Result;
use crate::core::service::ApiService;

/// Login with username and password (form-encoded).
#[tracing::instrument(skip(api, password))]
pub async fn login<S: ApiService + ?Sized>(api: &S, username: &str, password: &str) -> Result<Envelope> {
    tracing::info!("Attempting login");
    api.send(
        ApiRequest::post_form("/user/login", json!({ "username": username, "password": password }))
            .loading_message("Logging in..."),
    )
    .await
}

/// Register a new account.
#[tracing::instrument(skip(api, password))]
pub async fn register<S: ApiService + ?Sized>(
    api: &S,
    username: &str,
    phone: &str,
    password: &str,
) -> Result<Envelope> {
    api.send(
        ApiRequest::post_form(
            "/user/register",
            json!({ "username": username, "phone": phone, "password": password }),
        )
        .loading_message("Registering..."),
    )
    .await
}

/// Whether `username` is already taken; the answer is in `data`.
pub async fn check_username<S: ApiService + ?Sized>(api: &S, username: &str) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/user/check/username/{}", encode_segment(username))))
        .await
}

pub async fn check_phone<S: ApiService + ?Sized>(api: &S, phone: &str) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/user/check/phone/{}", encode_segment(phone))))
        .await
}

pub async fn get_user<S: ApiService + ?Sized>(api: &S, user_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/user/{user_id}"))).await
}

pub async fn get_user_by_username<S: ApiService + ?Sized>(api: &S, username: &str) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/user/username/{}", encode_segment(username))))
        .await
}

/// Update nickname and avatar. Fields left `None` are not sent.
pub async fn update_user<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    profile: &ProfileUpdate,
) -> Result<Envelope> {
    let mut params = serde_json::to_value(profile)?;
    params["userId"] = json!(user_id);
    api.send(ApiRequest::post_form("/user/update", params)).await
}

#[tracing::instrument(skip(api, change))]
pub async fn change_password<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    change: &PasswordChange,
) -> Result<Envelope> {
    let mut params = serde_json::to_value(change)?;
    params["userId"] = json!(user_id);
    api.send(ApiRequest::post_form("/user/change-password", params)).await
}
