use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// User wallet with running totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: i64,
    pub user_id: i64,
    pub balance: f64,
    #[serde(default)]
    pub frozen_balance: f64,
    #[serde(default)]
    pub total_recharge: f64,
    #[serde(default)]
    pub total_consumption: f64,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Body shared by every wallet mutation (`recharge`, `consume`, `freeze`, ...)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletAmountRequest {
    pub user_id: i64,
    pub amount: f64,
}
