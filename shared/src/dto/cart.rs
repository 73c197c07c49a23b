use serde::{Deserialize, Serialize};

use super::catalog::Product;

/// One line of a user's cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    #[serde(default)]
    pub product: Option<Product>,
}

/// Payload of `/cart/total/{userId}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub total: f64,
    pub item_count: i64,
}
