//! # Cart Endpoints

use std::collections::BTreeMap;

use serde_json::json;

use super::{ApiRequest, Envelope};
use crate::core::error::Result;
use crate::core::service::ApiService;

/// Quantity used by `add_to_cart` when the caller gives none.
pub const DEFAULT_QUANTITY: u32 = 1;

pub async fn get_cart_items<S: ApiService + ?Sized>(api: &S, user_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/cart/list/{user_id}"))).await
}

pub async fn add_to_cart<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    product_id: i64,
    quantity: Option<u32>,
) -> Result<Envelope> {
    let quantity = quantity.unwrap_or(DEFAULT_QUANTITY);
    api.send(
        ApiRequest::post_form(
            "/cart/add",
            json!({ "userId": user_id, "productId": product_id, "quantity": quantity }),
        )
        .loading_message("Adding to cart..."),
    )
    .await
}

pub async fn update_cart_quantity<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    product_id: i64,
    quantity: u32,
) -> Result<Envelope> {
    api.send(
        ApiRequest::post_form(
            "/cart/update",
            json!({ "userId": user_id, "productId": product_id, "quantity": quantity }),
        )
        .loading_message("Updating quantity..."),
    )
    .await
}

pub async fn remove_from_cart<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    product_id: i64,
) -> Result<Envelope> {
    api.send(
        ApiRequest::delete("/cart/remove")
            .params(json!({ "userId": user_id, "productId": product_id }))
            .loading_message("Removing item..."),
    )
    .await
}

pub async fn clear_cart<S: ApiService + ?Sized>(api: &S, user_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::delete(format!("/cart/clear/{user_id}"))).await
}

/// Cart total and item count; decode `data` as [`shared::CartSummary`].
pub async fn get_cart_summary<S: ApiService + ?Sized>(api: &S, user_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/cart/total/{user_id}"))).await
}

/// Move a guest cart (product id → quantity) into the user's cart after login.
pub async fn migrate_guest_cart<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    guest_cart: &BTreeMap<i64, u32>,
) -> Result<Envelope> {
    let body = serde_json::to_value(guest_cart)?;
    api.send(ApiRequest::post_json("/cart/migrate", body).query("userId", user_id))
        .await
}
