//! # Request Description
//!
//! What an endpoint function hands to [`ApiService::send`](crate::core::ApiService::send):
//! path, method, parameters, and how to encode them.
//!
//! ## Encodings
//!
//! | Encoding | Where params go | Content type |
//! |---|---|---|
//! | `Query` | appended to the URL query string | none |
//! | `Form` | request body as `key=value&...` | `application/x-www-form-urlencoded` |
//! | `Json` | request body as JSON | `application/json` |
//!
//! Query and Form flatten the params object into pairs: strings verbatim,
//! numbers and booleans as their JSON text, arrays comma-joined, `null`
//! entries dropped. Nested objects cannot be flattened and are rejected.
//!
//! ```rust
//! use serde_json::json;
//! use storefront::services::api::ApiRequest;
//!
//! let request = ApiRequest::post_form("/user/login", json!({ "username": "lin", "password": "pw" }))
//!     .loading_message("Logging in...");
//!
//! assert_eq!(request.config.loading_message.as_deref(), Some("Logging in..."));
//! assert!(request.config.show_loading);
//! ```

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;

use crate::core::error::{ClientError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    Query,
    Form,
    Json,
}

/// Per-call options.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: Method,
    pub headers: HeaderMap,
    pub encoding: BodyEncoding,
    /// Show the loading overlay while the call is in flight (default `true`)
    pub show_loading: bool,
    /// Overlay text; `None` uses the client's default
    pub loading_message: Option<String>,
}

impl RequestConfig {
    pub fn new(method: Method, encoding: BodyEncoding) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            encoding,
            show_loading: true,
            loading_message: None,
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::new(Method::GET, BodyEncoding::Query)
    }
}

/// One call against the backend.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Path relative to the base URL, starting with `/`
    pub path: String,
    /// Extra query pairs sent regardless of encoding
    pub query: Vec<(String, String)>,
    /// Params object, encoded per `config.encoding`
    pub params: Option<Value>,
    pub config: RequestConfig,
}

impl ApiRequest {
    /// Body-less call with the given method.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            params: None,
            config: RequestConfig::new(method, BodyEncoding::Query),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn post_form(path: impl Into<String>, params: Value) -> Self {
        Self::with_body(Method::POST, BodyEncoding::Form, path, params)
    }

    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self::with_body(Method::POST, BodyEncoding::Json, path, body)
    }

    pub fn put_json(path: impl Into<String>, body: Value) -> Self {
        Self::with_body(Method::PUT, BodyEncoding::Json, path, body)
    }

    pub fn patch_json(path: impl Into<String>, body: Value) -> Self {
        Self::with_body(Method::PATCH, BodyEncoding::Json, path, body)
    }

    pub fn delete_json(path: impl Into<String>, body: Value) -> Self {
        Self::with_body(Method::DELETE, BodyEncoding::Json, path, body)
    }

    fn with_body(method: Method, encoding: BodyEncoding, path: impl Into<String>, params: Value) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            params: Some(params),
            config: RequestConfig::new(method, encoding),
        }
    }

    /// Query-encoded params (for GET and DELETE).
    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.config.loading_message = Some(message.into());
        self
    }

    /// Skip the loading overlay for this call.
    pub fn silent(mut self) -> Self {
        self.config.show_loading = false;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.config.headers.insert(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.config.method
    }

    /// Every query pair for the URL: explicit `query` entries, then the
    /// params when the encoding is `Query`.
    pub fn query_pairs(&self) -> Result<Vec<(String, String)>> {
        let mut pairs = self.query.clone();
        if self.config.encoding == BodyEncoding::Query {
            if let Some(params) = &self.params {
                pairs.extend(encode_pairs(params)?);
            }
        }
        Ok(pairs)
    }
}

/// Flatten a params object into key/value pairs.
pub fn encode_pairs(params: &Value) -> Result<Vec<(String, String)>> {
    let object = params.as_object().ok_or_else(|| {
        ClientError::InvalidRequest(format!("params must be a JSON object, got {params}"))
    })?;

    let mut pairs = Vec::with_capacity(object.len());
    for (key, value) in object {
        if let Some(encoded) = encode_scalar(key, value)? {
            pairs.push((key.clone(), encoded));
        }
    }
    Ok(pairs)
}

fn encode_scalar(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.push(encode_scalar(key, item)?.unwrap_or_default());
            }
            Ok(Some(parts.join(",")))
        }
        Value::Object(_) => Err(ClientError::InvalidRequest(format!(
            "param {key:?} is a nested object and cannot be form or query encoded"
        ))),
    }
}
