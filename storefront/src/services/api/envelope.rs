//! # Response Envelope
//!
//! Every backend response is a JSON object carrying a numeric `code`.
//! `code == 200` is the only success signal; the client recomputes
//! `success` from it on every response and ignores any `success` the server
//! sent. Every other field is kept exactly as received.
//!
//! ```rust
//! use serde_json::json;
//! use storefront::services::api::Envelope;
//!
//! let ok = Envelope::from_value(json!({ "code": 200, "data": [1, 2] })).unwrap();
//! assert!(ok.success);
//!
//! let bad = Envelope::from_value(json!({ "code": 400, "message": "bad" })).unwrap();
//! assert!(!bad.success);
//! assert_eq!(bad.message_text().as_deref(), Some("bad"));
//! ```

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::core::error::{ClientError, Result};

pub const SUCCESS_CODE: i64 = 200;

/// Normalized backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// `None` when the backend sent no integral numeric `code`
    pub code: Option<i64>,
    /// Raw `message` value; see [`Envelope::message_text`]
    pub message: Option<Value>,
    /// Raw `data` value; `Some(Value::Null)` for an explicit `"data": null`
    pub data: Option<Value>,
    /// Remaining top-level fields (e.g. `balance`, `wallet`)
    pub extra: Map<String, Value>,
    /// Derived: `code == Some(200)`
    pub success: bool,
}

impl Envelope {
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(ClientError::Decode(format!(
                "expected a JSON object envelope, got {}",
                json_kind(&value)
            )));
        };

        let code = match fields.remove("code") {
            Some(raw) => match integral_code(&raw) {
                Some(code) => Some(code),
                None => {
                    // Not a number we can compare; keep it for to_value
                    fields.insert("code".to_string(), raw);
                    None
                }
            },
            None => None,
        };
        let message = fields.remove("message");
        let data = fields.remove("data");
        // Derived below, never taken from the wire
        fields.remove("success");

        Ok(Self {
            success: code == Some(SUCCESS_CODE),
            code,
            message,
            data,
            extra: fields,
        })
    }

    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// `Ok(self)` on success, `Err(ClientError::Application)` otherwise.
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ClientError::Application {
                message: self.message_text(),
                code: self.code,
            })
        }
    }

    /// Decode `data` into `T` after checking for success.
    ///
    /// A missing `data` is decoded from JSON `null`, so `Option<T>` and `()`
    /// targets accept it.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.success {
            return Err(ClientError::Application {
                code: self.code,
                message: self.message_text(),
            });
        }
        let data = self.data.clone().unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    /// `message` as display text: strings verbatim, other JSON values in
    /// their JSON form, `None` when absent or `null`.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null => None,
            Value::String(message) => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Decode a top-level field other than `data` (the wallet endpoints
    /// put their payload under keys like `balance` or `wallet`).
    pub fn field_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.extra.get(key).cloned().unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }

    /// The envelope as JSON, including the derived `success` field.
    pub fn to_value(&self) -> Value {
        let mut fields = self.extra.clone();
        if let Some(code) = self.code {
            fields.insert("code".to_string(), Value::from(code));
        }
        if let Some(message) = &self.message {
            fields.insert("message".to_string(), message.clone());
        }
        if let Some(data) = &self.data {
            fields.insert("data".to_string(), data.clone());
        }
        fields.insert("success".to_string(), Value::Bool(self.success));
        Value::Object(fields)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// `200` and `200.0` both count; fractional or non-numeric codes do not.
fn integral_code(raw: &Value) -> Option<i64> {
    if let Some(code) = raw.as_i64() {
        return Some(code);
    }
    let code = raw.as_f64()?;
    if code.fract() == 0.0 && code.abs() < i64::MAX as f64 {
        Some(code as i64)
    } else {
        None
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
