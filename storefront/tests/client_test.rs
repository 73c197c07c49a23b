//! Integration tests for `ApiClient` against a wiremock backend.
//!
//! Covers:
//! - Param encoding (query, form, JSON) on the wire
//! - Per-call headers
//! - Envelope normalization regardless of HTTP status
//! - Overlay reference counting around in-flight calls
//! - Transport and decode failures

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared::{AddressInput, Category, OrderStatus, ProductForm};
use storefront::config::ClientConfig;
use storefront::core::{ApiService, ClientError};
use storefront::services::api::{address, cart, category, order, product, user, ApiClient, ApiRequest};
use storefront::ui::{HeadlessOverlay, LoadingIndicator};

// =============================================================================
// Helpers
// =============================================================================

struct Harness {
    api: ApiClient,
    loading: Arc<LoadingIndicator>,
    surface: Arc<HeadlessOverlay>,
}

fn harness(base_url: impl Into<String>) -> Harness {
    let surface = Arc::new(HeadlessOverlay::default());
    let loading = Arc::new(LoadingIndicator::new(surface.clone()));
    let config = ClientConfig::default().with_base_url(base_url);
    let api = ApiClient::new(&config, loading.clone()).expect("client build");
    Harness { api, loading, surface }
}

fn ok_body() -> serde_json::Value {
    json!({ "code": 200, "message": "success" })
}

/// Wait long enough for a delayed mock response to still be in flight.
async fn mid_flight() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[tokio::test]
async fn get_params_are_sent_as_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/search"))
        .and(query_param("keyword", "green tea"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let envelope = product::search_products(&h.api, "green tea").await.unwrap();

    assert!(envelope.success);
}

#[tokio::test]
async fn form_params_are_url_encoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=lin"))
        .and(body_string_contains("password=p%40ss+word"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": { "id": 3, "username": "lin" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let envelope = user::login(&h.api, "lin", "p@ss word").await.unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap()["id"], json!(3));
}

#[tokio::test]
async fn json_params_are_sent_as_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/product"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Green tea",
            "price": 9.99,
            "originalPrice": null,
            "stock": 3,
            "categoryId": 2,
            "status": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let form = ProductForm {
        name: "Green tea".to_string(),
        price: "9.99".to_string(),
        stock: "3".to_string(),
        category_id: "2".to_string(),
        status: "available".to_string(),
        ..Default::default()
    };

    let h = harness(server.uri());
    assert!(product::add_product(&h.api, &form).await.unwrap().success);
}

#[tokio::test]
async fn status_update_is_put_with_query() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/order/12/status"))
        .and(query_param("status", "delivered"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let envelope = order::update_order_status(&h.api, 12, OrderStatus::Delivered)
        .await
        .unwrap();

    assert!(envelope.success);
}

#[tokio::test]
async fn address_batch_delete_carries_ids() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/3/addresses/batch"))
        .and(body_json(json!({ "addressIds": [4, 5] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(server.uri());
    assert!(address::batch_delete_addresses(&h.api, 3, &[4, 5]).await.unwrap().success);
}

#[tokio::test]
async fn address_create_sends_camel_case_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/3/addresses"))
        .and(body_string_contains("\"deliveryAddress\":\"1 Main St\""))
        .and(body_string_contains("\"isDefault\":true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let input = AddressInput {
        delivery_address: "1 Main St".to_string(),
        contact_name: "Lin".to_string(),
        contact_phone: "13800000000".to_string(),
        is_default: Some(true),
        ..Default::default()
    };

    let h = harness(server.uri());
    assert!(address::add_user_address(&h.api, 3, &input).await.unwrap().success);
}

// =============================================================================
// Header Tests
// =============================================================================

#[tokio::test]
async fn extra_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/order/user/3"))
        .and(header("authorization", "Bearer token-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let envelope = h
        .api
        .send(ApiRequest::get("/order/user/3").header(AUTHORIZATION, HeaderValue::from_static("Bearer token-3")))
        .await
        .unwrap();

    assert!(envelope.success);
}

#[tokio::test]
async fn caller_content_type_replaces_form_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cart/update"))
        .and(header("content-type", "application/x-www-form-urlencoded; charset=UTF-8"))
        .and(body_string_contains("quantity=4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::post_form("/cart/update", json!({ "userId": 3, "productId": 9, "quantity": 4 }))
        .header(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=UTF-8"),
        );

    let h = harness(server.uri());
    assert!(h.api.send(request).await.unwrap().success);
}

#[tokio::test]
async fn caller_content_type_replaces_json_default() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/category/4"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .and(body_json(json!({ "name": "Snacks", "status": 0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::put_json("/category/4", json!({ "name": "Snacks", "status": 0 }))
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"));

    let h = harness(server.uri());
    assert!(h.api.send(request).await.unwrap().success);
}

// =============================================================================
// Envelope Tests
// =============================================================================

#[tokio::test]
async fn success_envelope_decodes_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": [
                { "id": 1, "name": "Tea", "status": 1 },
                { "id": 2, "name": "Coffee", "status": 1 }
            ]
        })))
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let envelope = category::get_categories(&h.api).await.unwrap();

    assert!(envelope.success);
    let categories: Vec<Category> = envelope.data_as().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].name, "Coffee");
}

#[tokio::test]
async fn null_data_survives_normalization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/3/addresses/default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 200, "data": null })))
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let envelope = address::get_default_address(&h.api, 3).await.unwrap();

    assert_eq!(envelope.to_value(), json!({ "code": 200, "data": null, "success": true }));
}

#[tokio::test]
async fn failure_code_is_a_normal_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cart/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 400,
            "message": "out of stock"
        })))
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let envelope = cart::add_to_cart(&h.api, 3, 9, Some(2)).await.unwrap();

    assert!(!envelope.success);
    assert_eq!(envelope.code, Some(400));
    assert_eq!(envelope.message_text().as_deref(), Some("out of stock"));
    assert_eq!(h.loading.active_count(), 0);
}

#[tokio::test]
async fn http_status_does_not_override_envelope_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/order/99"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500,
            "message": "order lookup failed"
        })))
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let envelope = order::get_order_detail(&h.api, 99).await.unwrap();

    assert!(!envelope.success);
    assert_eq!(envelope.code, Some(500));
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/list"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let err = category::get_categories(&h.api).await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
    assert!(!h.loading.is_visible());
}

// =============================================================================
// Overlay Tests
// =============================================================================

#[tokio::test]
async fn overlay_is_shown_during_call_and_released_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/list"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body())
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let (result, during) = tokio::join!(category::get_categories(&h.api), async {
        mid_flight().await;
        (h.surface.is_visible(), h.surface.message())
    });

    assert!(result.unwrap().success);
    assert_eq!(during, (true, Some("Loading categories...".to_string())));
    assert!(!h.surface.is_visible());
    assert_eq!(h.loading.active_count(), 0);
}

#[tokio::test]
async fn default_loading_message_is_used_when_call_sets_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cart/list/3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body())
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let (_, message) = tokio::join!(cart::get_cart_items(&h.api, 3), async {
        mid_flight().await;
        h.surface.message()
    });

    assert_eq!(message.as_deref(), Some("Requesting..."));
}

#[tokio::test]
async fn overlapping_calls_share_one_overlay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/list"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body())
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/list"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body())
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let (a, b, count) = tokio::join!(
        category::get_categories(&h.api),
        product::get_all_products(&h.api),
        async {
            mid_flight().await;
            h.loading.active_count()
        }
    );

    assert!(a.unwrap().success);
    assert!(b.unwrap().success);
    assert_eq!(count, 2);
    assert!(!h.loading.is_visible());
}

#[tokio::test]
async fn silent_call_leaves_overlay_alone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/order/merchant/pending"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body())
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let (result, visible) = tokio::join!(order::get_pending_merchant_orders(&h.api), async {
        mid_flight().await;
        h.surface.is_visible()
    });

    assert!(result.unwrap().success);
    assert!(!visible);
}

#[tokio::test]
async fn custom_silent_request_through_service_trait() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/check/phone/13800000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 200, "data": false })))
        .mount(&server)
        .await;

    let h = harness(server.uri());
    let envelope = h
        .api
        .send(ApiRequest::get("/user/check/phone/13800000000").silent())
        .await
        .unwrap();

    assert!(!envelope.data_as::<bool>().unwrap());
    assert_eq!(h.surface.message(), None);
}

// =============================================================================
// Transport Failure Tests
// =============================================================================

#[tokio::test]
async fn unreachable_backend_is_transport_error_and_releases_overlay() {
    // Reserve a port, then free it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let h = harness(format!("http://127.0.0.1:{port}"));
    let err = category::get_categories(&h.api).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.to_string().starts_with("Network error"));
    assert_eq!(h.loading.active_count(), 0);
    assert!(!h.surface.is_visible());
}

#[tokio::test]
async fn timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/list"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let surface = Arc::new(HeadlessOverlay::default());
    let loading = Arc::new(LoadingIndicator::new(surface.clone()));
    let config = ClientConfig {
        timeout: Duration::from_millis(200),
        ..ClientConfig::default().with_base_url(server.uri())
    };
    let api = ApiClient::new(&config, loading.clone()).unwrap();

    let err = category::get_categories(&api).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert!(!surface.is_visible());
}
