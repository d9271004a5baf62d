//! The full storefront happy path: log in, browse, fill the cart, check
//! out, and download the invoice.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use velasona_client::{CheckoutInput, ProductFilter};
use velasona_core::{OrderStatus, ProductCategory};
use velasona_integration_tests::{
    TestContext, cart_fixture, login_payload, order_fixture, product_page_fixture,
};

#[tokio::test]
async fn browse_checkout_and_invoice() {
    let ctx = TestContext::new().await;

    ctx.mock_ok("POST", "/auth/login", login_payload("tok_flow")).await;
    ctx.mock_ok("GET", "/products", product_page_fixture()).await;
    ctx.mock_ok("POST", "/cart/items", cart_fixture("49.00")).await;
    ctx.mock_ok("POST", "/orders", order_fixture("ord_9", "PENDING", "49.00"))
        .await;
    ctx.mock_ok(
        "GET",
        "/orders",
        json!({
            "orders": [order_fixture("ord_9", "PAID", "49.00")],
            "pagination": {"page": 1, "limit": 10, "total": 1, "totalPages": 1, "hasMore": false}
        }),
    )
    .await;
    ctx.mock_ok(
        "GET",
        "/invoices/inv_9",
        json!({
            "id": "inv_9",
            "invoiceNumber": "INV-0009",
            "orderId": "ord_9",
            "status": "ISSUED",
            "total": "49.00",
            "issuedAt": "2026-02-01T09:30:00Z"
        }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/invoices/inv_9/pdf"))
        .and(header("authorization", "Bearer tok_flow"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(b"%PDF-1.7 factura".to_vec()),
        )
        .mount(&ctx.server)
        .await;

    ctx.client
        .login("cliente@velasona.shop", "secret")
        .await
        .expect("login");

    let filter = ProductFilter {
        category: Some(ProductCategory::Candles),
        page: Some(1),
        limit: Some(10),
        ..ProductFilter::default()
    };
    let products = ctx.client.products(&filter).await.expect("products");
    let product = &products.items[0];
    assert_eq!(product.name(ctx.client.language()), "Vela de lavanda");

    let cart = ctx
        .client
        .add_to_cart(&product.id, 2)
        .await
        .expect("add to cart");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.unit_count(), 2);

    let order = ctx
        .client
        .checkout(&CheckoutInput {
            shipping_address_id: "addr_1".into(),
            payment_method: "tok_visa".to_owned(),
            notes: None,
        })
        .await
        .expect("checkout");
    assert_eq!(order.status, OrderStatus::Pending);

    let orders = ctx.client.orders(None, None).await.expect("orders");
    assert_eq!(orders.items[0].status, OrderStatus::Paid);

    let dir = tempfile::tempdir().expect("tempdir");
    let saved = ctx
        .client
        .download_invoice_pdf(&"inv_9".into(), dir.path())
        .await
        .expect("download");
    assert_eq!(saved.file_name().and_then(|n| n.to_str()), Some("INV-0009.pdf"));
    assert!(std::fs::read(&saved).expect("read pdf").starts_with(b"%PDF"));
}

#[tokio::test]
async fn product_filter_builds_the_expected_query() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("category", "CANDLES"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": product_page_fixture()})),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let filter = ProductFilter {
        category: Some(ProductCategory::Candles),
        page: Some(1),
        limit: Some(10),
        ..ProductFilter::default()
    };
    ctx.client.products(&filter).await.expect("products");

    let requests = ctx.server.received_requests().await.expect("requests");
    let query = requests
        .iter()
        .find(|r| r.url.path() == "/api/products")
        .and_then(|r| r.url.query())
        .expect("query string");
    assert_eq!(query, "category=CANDLES&page=1&limit=10");
}
