//! Error taxonomy end to end: server envelopes, unstructured failures,
//! and transport errors.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use velasona_client::ApiError;
use velasona_integration_tests::TestContext;

#[tokio::test]
async fn envelope_error_beats_http_status() {
    let ctx = TestContext::new().await;
    ctx.mock_err("POST", "/orders", 422, "EMPTY_CART", "No puedes pagar un carrito vacío")
        .await;

    let err = ctx
        .client
        .checkout(&velasona_client::CheckoutInput {
            shipping_address_id: "addr_1".into(),
            payment_method: "tok_visa".to_owned(),
            notes: None,
        })
        .await
        .expect_err("should fail");

    assert_eq!(err.code(), "EMPTY_CART");
    assert_eq!(err.to_string(), "No puedes pagar un carrito vacío");
    assert!(matches!(err, ApiError::Api { .. }));
}

#[tokio::test]
async fn unstructured_failure_is_unknown_error() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&ctx.server)
        .await;

    let err = ctx.client.orders(None, None).await.expect_err("should fail");
    assert_eq!(err.code(), "UNKNOWN_ERROR");
}

#[tokio::test]
async fn transport_failure_is_network_error() {
    // A dropped wiremock server returns to a pool and keeps listening, so
    // grab a free port from the OS and close it to get a dead address.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let config =
        velasona_client::ClientConfig::new(&format!("http://{addr}/api")).expect("config");
    let client = velasona_client::StoreClient::new(config).expect("client");

    let err = client.orders(None, None).await.expect_err("should fail");
    assert_eq!(err.code(), "NETWORK_ERROR");
}

#[tokio::test]
async fn unauthorized_is_detectable_for_session_expiry_handling() {
    let ctx = TestContext::new().await;
    ctx.mock_err("GET", "/auth/me", 401, "UNAUTHORIZED", "Sesión caducada")
        .await;

    let err = ctx.client.current_user().await.expect_err("should fail");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn success_without_data_is_an_error_for_typed_calls() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&ctx.server)
        .await;

    let err = ctx.client.cart().await.expect_err("should fail");
    assert_eq!(err.code(), "UNKNOWN_ERROR");
}
