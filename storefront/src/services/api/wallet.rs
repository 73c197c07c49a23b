//! # Wallet Endpoints
//!
//! The wallet controller answers with top-level fields (`balance`, `wallet`,
//! `hasEnoughBalance`) instead of `data`; read them with
//! [`Envelope::field_as`].

use shared::WalletAmountRequest;

use super::{ApiRequest, Envelope};
use crate::core::error::Result;
use crate::core::service::ApiService;

pub async fn get_user_wallet<S: ApiService + ?Sized>(api: &S, user_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/wallet/user/{user_id}"))).await
}

pub async fn get_balance<S: ApiService + ?Sized>(api: &S, user_id: i64) -> Result<Envelope> {
    api.send(ApiRequest::get(format!("/wallet/balance/{user_id}"))).await
}

pub async fn recharge<S: ApiService + ?Sized>(api: &S, user_id: i64, amount: f64) -> Result<Envelope> {
    post_amount(api, "/wallet/recharge", user_id, amount).await
}

/// Recharge by one of the preset amounts offered in the wallet screen.
pub async fn quick_recharge<S: ApiService + ?Sized>(api: &S, user_id: i64, amount: f64) -> Result<Envelope> {
    post_amount(api, "/wallet/quick-recharge", user_id, amount).await
}

pub async fn check_balance<S: ApiService + ?Sized>(api: &S, user_id: i64, amount: f64) -> Result<Envelope> {
    post_amount(api, "/wallet/check-balance", user_id, amount).await
}

pub async fn consume<S: ApiService + ?Sized>(api: &S, user_id: i64, amount: f64) -> Result<Envelope> {
    post_amount(api, "/wallet/consume", user_id, amount).await
}

pub async fn freeze_balance<S: ApiService + ?Sized>(api: &S, user_id: i64, amount: f64) -> Result<Envelope> {
    post_amount(api, "/wallet/freeze", user_id, amount).await
}

pub async fn unfreeze_balance<S: ApiService + ?Sized>(api: &S, user_id: i64, amount: f64) -> Result<Envelope> {
    post_amount(api, "/wallet/unfreeze", user_id, amount).await
}

async fn post_amount<S: ApiService + ?Sized>(api: &S, path: &str, user_id: i64, amount: f64) -> Result<Envelope> {
    let body = serde_json::to_value(WalletAmountRequest { user_id, amount })?;
    api.send(ApiRequest::post_json(path, body)).await
}
