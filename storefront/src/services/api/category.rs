//! # Category Endpoints

use shared::CategoryForm;

use super::{ApiRequest, Envelope};
use crate::core::error::Result;
use crate::core::service::ApiService;

/// Listed categories, for the shop front.
pub async fn get_categories<S: ApiService + ?Sized>(api: &S) -> Result<Envelope> {
    api.send(ApiRequest::get("/category/list").loading_message("Loading categories..."))
        .await
}

/// Same listing for the admin screens, with the default overlay text.
pub async fn get_all_categories<S: ApiService + ?Sized>(api: &S) -> Result<Envelope> {
    api.send(ApiRequest::get("/category/list")).await
}

pub async fn get_category<S: ApiService + ?Sized>(api: &S, category_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/category/{category_id}"))).await
}

pub async fn add_category<S: ApiService + ?Sized>(api: &S, form: &CategoryForm) -> Result<Envelope> {
    let body = serde_json::to_value(form.to_payload())?;
    api.send(ApiRequest::post_json("/category", body)).await
}

pub async fn update_category<S: ApiService + ?Sized>(
    api: &S,
    category_id: i64,
    form: &CategoryForm,
) -> Result<Envelope> {
    let body = serde_json::to_value(form.to_payload())?;
    api.send(ApiRequest::put_json(format!("/category/{category_id}"), body))
        .await
}

pub async fn delete_category<S: ApiService + ?Sized>(api: &S, category_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::delete(format!("/category/{category_id}"))).await
}
