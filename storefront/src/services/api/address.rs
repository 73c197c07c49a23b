//! # Address Endpoints
//!
//! Delivery address book under `/users/{userId}/addresses`.

use serde_json::json;
use shared::{AddressInput, AddressPatch};

use super::{ApiRequest, Envelope};
use crate::core::error::{ClientError, Result};
use crate::core::service::ApiService;
use reqwest::Method;

fn base(user_id: i64) -> String {
    format!("/users/{user_id}/addresses")
}

pub async fn get_user_addresses<S: ApiService + ?Sized>(api: &S, user_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(base(user_id))).await
}

pub async fn get_default_address<S: ApiService + ?Sized>(api: &S, user_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("{}/default", base(user_id)))).await
}

pub async fn get_user_address<S: ApiService + ?Sized>(api: &S, user_id: i64, address_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("{}/{address_id}", base(user_id)))).await
}

pub async fn add_user_address<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    address: &AddressInput,
) -> Result<Envelope> {
    let body = serde_json::to_value(address)?;
    api.send(ApiRequest::post_json(base(user_id), body)).await
}

pub async fn update_user_address<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    address_id: i64,
    address: &AddressInput,
) -> Result<Envelope> {
    let body = serde_json::to_value(address)?;
    api.send(ApiRequest::put_json(format!("{}/{address_id}", base(user_id)), body))
        .await
}

/// Partial update; only fields set in `patch` are sent.
pub async fn patch_user_address<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    address_id: i64,
    patch: &AddressPatch,
) -> Result<Envelope> {
    if patch.is_empty() {
        return Err(ClientError::InvalidRequest("address patch has no fields".to_string()));
    }
    let body = serde_json::to_value(patch)?;
    api.send(ApiRequest::patch_json(format!("{}/{address_id}", base(user_id)), body))
        .await
}

pub async fn delete_user_address<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    address_id: i64,
) -> Result<Envelope> {
    api.send(ApiRequest::delete(format!("{}/{address_id}", base(user_id)))).await
}

pub async fn set_default_address<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    address_id: i64,
) -> Result<Envelope> {
    api.send(ApiRequest::new(
        Method::PATCH,
        format!("{}/{address_id}/default", base(user_id)),
    ))
    .await
}

/// Delete several addresses in one call (JSON body `{"addressIds": [...]}`).
pub async fn batch_delete_addresses<S: ApiService + ?Sized>(
    api: &S,
    user_id: i64,
    address_ids: &[i64],
) -> Result<Envelope> {
    if address_ids.is_empty() {
        return Err(ClientError::InvalidRequest("no addresses selected".to_string()));
    }
    api.send(ApiRequest::delete_json(
        format!("{}/batch", base(user_id)),
        json!({ "addressIds": address_ids }),
    ))
    .await
}
