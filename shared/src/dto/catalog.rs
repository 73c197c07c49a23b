//! # Catalog Data Transfer Objects
//!
//! Categories, products, and the admin forms that create or update them.
//!
//! Admin forms arrive as raw form values (every field a string, status as the
//! word `"available"`). The backend wants typed JSON, so each form has a
//! `to_payload()` that applies the coercion rules:
//!
//! | Field | Rule |
//! |---|---|
//! | `status` | `"available"` → `1`, anything else → `0` |
//! | `price` | leading float, `null` when unparseable |
//! | `originalPrice` | `null` when empty or absent, otherwise like `price` |
//! | `stock`, `categoryId` | leading integer, `null` when unparseable |
//!
//! Fields the form does not know about are forwarded unchanged.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::{parse_float_prefix, parse_int_prefix};

/// Form value that marks a product or category as listed.
pub const STATUS_AVAILABLE: &str = "available";

/// Map the form's status word to the backend's integer flag.
pub fn status_flag(status: &str) -> i32 {
    if status == STATUS_AVAILABLE {
        1
    } else {
        0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub sales: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub created_time: Option<NaiveDateTime>,
}

/// Product form as entered in the admin screen
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub stock: String,
    pub category_id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Any other form fields, forwarded verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Typed product body sent to `POST /product` and `PUT /product/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub stock: Option<i64>,
    pub category_id: Option<i64>,
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductForm {
    pub fn to_payload(&self) -> ProductPayload {
        let original_price = self
            .original_price
            .as_deref()
            .filter(|value| !value.is_empty())
            .and_then(parse_float_prefix);

        ProductPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            price: parse_float_prefix(&self.price),
            original_price,
            stock: parse_int_prefix(&self.stock),
            category_id: parse_int_prefix(&self.category_id),
            status: status_flag(&self.status),
            image: self.image.clone(),
            extra: self.extra.clone(),
        }
    }
}

/// Category form as entered in the admin screen
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CategoryForm {
    pub fn to_payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            status: status_flag(&self.status),
            extra: self.extra.clone(),
        }
    }
}
