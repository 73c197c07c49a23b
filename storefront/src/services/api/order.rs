//! # Order Endpoints
//!
//! Customer checkout and history, plus the admin and merchant workflow:
//!
//! ```text
//! pending ──pay──► paid ──confirm──► confirmed ──start_delivery──► delivering ──deliver──► delivered ──complete──► completed
//!    │               │
//!    └──cancel──►  cancelled / rejected ◄──reject──┘
//! ```

use serde_json::json;
use shared::{OrderContact, OrderStatus};

use super::{encode_segment, ApiRequest, Envelope};
use crate::core::error::Result;
use crate::core::service::ApiService;
use reqwest::Method;

/// Turn the user's cart into an order.
#[tracing::instrument(skip(api, contact))]
pub async fn create_order_from_cart<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    contact: &OrderContact,
) -> Result<Envelope> {
    let mut params = serde_json::to_value(contact)?;
    params["userId"] = json!(user_id);
    api.send(ApiRequest::post_form("/order/create", params).loading_message("Creating order..."))
        .await
}

pub async fn pay_order<S: ApiService + ?Sized>(api: &S, order_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::new(Method::POST, format!("/order/{order_id}/pay")))
        .await
}

pub async fn get_user_orders<S: ApiService + ?Sized>(api: &S, user_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/order/user/{user_id}"))).await
}

pub async fn get_order_detail<S: ApiService + ?Sized>(api: &S, order_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/order/{order_id}"))).await
}

pub async fn get_order_by_no<S: ApiService + ?Sized>(api: &S, order_no: &str) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/order/orderNo/{}", encode_segment(order_no))))
        .await
}

pub async fn cancel_order<S: ApiService + ?Sized>(api: &S, order_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::new(Method::PUT, format!("/order/{order_id}/cancel")))
        .await
}

/// Cancel on behalf of the customer; the backend checks ownership.
pub async fn cancel_order_by_user<S: ApiService + ?Sized>(
    api: &S,
    order_id: i64,
    user_id: i64,
) -> Result<Envelope> {
    api.send(ApiRequest::new(Method::PUT, format!("/order/{order_id}/cancel/user")).query("userId", user_id))
        .await
}

/// Confirm receipt.
pub async fn complete_order<S: ApiService + ?Sized>(api: &S, order_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::new(Method::PUT, format!("/order/{order_id}/complete")))
        .await
}

/// Put the items of a past order back into the user's cart.
pub async fn reorder<S: ApiService + ?Sized>(api: &S, order_id: i64, user_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::post_form(
        format!("/order/reorder/{order_id}"),
        json!({ "userId": user_id }),
    ))
    .await
}

pub async fn get_all_orders<S: ApiService + ?Sized>(api: &S) -> Result<Envelope> {
    api.send(ApiRequest::get("/order/list")).await
}

pub async fn get_orders_by_status<S: ApiService + ?Sized>(api: &S, status: OrderStatus) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/order/status/{}", status.code())))
        .await
}

pub async fn update_order_status<S: ApiService + ?Sized>(
    api: &S,
    order_id: i64,
    status: OrderStatus,
) -> Result<Envelope> {
    api.send(ApiRequest::new(Method::PUT, format!("/order/{order_id}/status")).query("status", status.code()))
        .await
}

pub async fn confirm_order<S: ApiService + ?Sized>(api: &S, order_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::new(Method::PUT, format!("/order/{order_id}/confirm")))
        .await
}

pub async fn reject_order<S: ApiService + ?Sized>(
    api: &S,
    order_id: i64,
    reason: Option<&str>,
) -> Result<Envelope> {
    let mut request = ApiRequest::new(Method::PUT, format!("/order/{order_id}/reject"));
    if let Some(reason) = reason {
        request = request.query("reason", reason);
    }
    api.send(request).await
}

pub async fn start_delivery<S: ApiService + ?Sized>(api: &S, order_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::new(Method::PUT, format!("/order/{order_id}/start-delivery")))
        .await
}

pub async fn deliver_order<S: ApiService + ?Sized>(api: &S, order_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::new(Method::PUT, format!("/order/{order_id}/deliver")))
        .await
}

/// Orders waiting for the merchant to confirm or reject.
pub async fn get_pending_merchant_orders<S: ApiService + ?Sized>(api: &S) -> Result<Envelope> {
    api.send(ApiRequest::get("/order/merchant/pending").silent()).await
}
