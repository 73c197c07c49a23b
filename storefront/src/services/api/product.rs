//! # Product Endpoints
//!
//! Catalog browsing plus the admin create/update/delete calls. Admin forms
//! are coerced to typed JSON by [`ProductForm::to_payload`] before sending.

use serde_json::json;
use shared::ProductForm;

use super::{ApiRequest, Envelope};
use crate::core::error::Result;
use crate::core::service::ApiService;

/// Products of one category, or every listed product when `category_id` is `None`.
pub async fn get_products_by_category<S: ApiService + ?Sized>(
    api: &S,
    category_id: Option<i64>,
) -> Result<Envelope> {
    let request = match category_id {
        Some(id) => ApiRequest::get(format!("/product/category/{id}")).loading_message("Loading products..."),
        None => ApiRequest::get("/product/list").loading_message("Loading all products..."),
    };
    api.send(request).await
}

pub async fn get_all_products<S: ApiService + ?Sized>(api: &S) -> Result<Envelope> {
    api.send(ApiRequest::get("/product/list")).await
}

pub async fn get_product<S: ApiService + ?Sized>(api: &S, product_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/product/{product_id}"))).await
}

/// Name search; the backend matches substrings.
pub async fn search_products<S: ApiService + ?Sized>(api: &S, keyword: &str) -> Result<Envelope> {
    api.send(
        ApiRequest::get("/product/search")
            .params(json!({ "keyword": keyword }))
            .loading_message("Searching..."),
    )
    .await
}

pub async fn add_product<S: ApiService + ?Sized>(api: &S, form: &ProductForm) -> Result<Envelope> {
    let body = serde_json::to_value(form.to_payload())?;
    api.send(ApiRequest::post_json("/product", body)).await
}

pub async fn update_product<S: ApiService + ?Sized>(
    api: &S,
    product_id: i64,
    form: &ProductForm,
) -> Result<Envelope> {
    let body = serde_json::to_value(form.to_payload())?;
    api.send(ApiRequest::put_json(format!("/product/{product_id}"), body))
        .await
}

pub async fn delete_product<S: ApiService + ?Sized>(api: &S, product_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::delete(format!("/product/{product_id}"))).await
}
