//! Behavior tests for the store client against a mock backend.
//!
//! These cover the envelope contract: server error messages pass through,
//! unstructured failures become `UNKNOWN_ERROR`, transport failures become
//! `NETWORK_ERROR`, and a stored login token rides along on every
//! subsequent request.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use velasona_client::{ApiError, ClientConfig, ProductFilter, StoreClient};
use velasona_core::ProductCategory;

fn client_for(server: &MockServer) -> StoreClient {
    let config = ClientConfig::new(&format!("{}/api", server.uri())).expect("config");
    StoreClient::new(config).expect("client")
}

fn product_page_body() -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "products": [{
                "id": "prod_1",
                "category": "CANDLES",
                "price": "24.50",
                "images": ["/uploads/products/lavanda.jpg"],
                "inStock": true,
                "translations": {
                    "name": {"es": "Vela de lavanda", "en": "Lavender candle"}
                }
            }],
            "pagination": {"page": 1, "limit": 10, "total": 1, "totalPages": 1, "hasMore": false}
        }
    })
}

// =============================================================================
// Envelope semantics
// =============================================================================

#[tokio::test]
async fn server_error_message_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "success": false,
            "error": {"code": "CART_LOCKED", "message": "El carrito está bloqueado"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).cart().await.expect_err("should fail");
    assert_eq!(err.code(), "CART_LOCKED");
    assert_eq!(err.to_string(), "El carrito está bloqueado");
}

#[tokio::test]
async fn bare_failure_uses_module_default_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).cart().await.expect_err("should fail");
    assert_eq!(err.code(), "UNKNOWN_ERROR");
    assert_eq!(err.to_string(), "Failed to load cart");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // A dropped wiremock server returns to a pool and keeps listening, so
    // grab a free port from the OS and close it to get a dead address.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let config = ClientConfig::new(&format!("http://{addr}/api")).expect("config");
    let client = StoreClient::new(config).expect("client");

    let err = client.cart().await.expect_err("should fail");
    assert_eq!(err.code(), "NETWORK_ERROR");
    assert!(matches!(err, ApiError::Network(_)));
}

// =============================================================================
// Auth token lifecycle
// =============================================================================

#[tokio::test]
async fn login_stores_token_for_subsequent_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "tok_abc123",
                "user": {
                    "id": "usr_1",
                    "email": "cliente@velasona.shop",
                    "role": "USER",
                    "createdAt": "2026-01-10T12:00:00Z",
                    "updatedAt": "2026-01-10T12:00:00Z"
                }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer tok_abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "usr_1",
                "email": "cliente@velasona.shop",
                "role": "USER",
                "createdAt": "2026-01-10T12:00:00Z",
                "updatedAt": "2026-01-10T12:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .login("cliente@velasona.shop", "secret")
        .await
        .expect("login");
    assert!(client.session().has_token());

    let user = client.current_user().await.expect("me");
    assert_eq!(user.email.as_str(), "cliente@velasona.shop");
}

#[tokio::test]
async fn logout_clears_token_even_when_backend_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.session().set_token("tok_abc123").expect("set token");

    client.logout().await.expect("logout");
    assert!(!client.session().has_token());
}

// =============================================================================
// Listing and pagination
// =============================================================================

#[tokio::test]
async fn product_filter_reaches_backend_as_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("category", "CANDLES"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page_body()))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ProductFilter {
        category: Some(ProductCategory::Candles),
        page: Some(1),
        limit: Some(10),
        ..ProductFilter::default()
    };
    let page = client_for(&server).products(&filter).await.expect("page");

    assert_eq!(page.items.len(), 1);
    assert!(page.pagination.is_consistent());
    assert!(!page.pagination.has_more);
}

#[tokio::test]
async fn multi_page_listing_reports_more_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "orders": [],
                "pagination": {"page": 1, "limit": 10, "total": 25, "totalPages": 3, "hasMore": true}
            }
        })))
        .mount(&server)
        .await;

    let page = client_for(&server).orders(Some(1), Some(10)).await.expect("page");
    assert!(page.pagination.has_more);
    assert_eq!(page.pagination.next_page(), Some(2));
    assert!(page.pagination.is_consistent());
}

// =============================================================================
// Client-side validation
// =============================================================================

#[tokio::test]
async fn out_of_range_rating_never_reaches_the_backend() {
    let server = MockServer::start().await;
    // No mock mounted: a request would 404 and fail differently

    let err = client_for(&server)
        .submit_review(&"prod_1".into(), 6, "demasiado buena")
        .await
        .expect_err("should fail");
    assert_eq!(err.code(), "VALIDATION_ERROR");
}

// =============================================================================
// Invoice PDF download
// =============================================================================

#[tokio::test]
async fn invoice_pdf_is_saved_under_its_invoice_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/invoices/inv_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "inv_123",
                "invoiceNumber": "INV-0001",
                "orderId": "ord_9",
                "status": "ISSUED",
                "total": "83.50",
                "issuedAt": "2026-02-01T09:30:00Z"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/invoices/inv_123/pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(b"%PDF-1.7 fake".to_vec()),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let dest = client_for(&server)
        .download_invoice_pdf(&"inv_123".into(), dir.path())
        .await
        .expect("download");

    assert_eq!(dest.file_name().and_then(|n| n.to_str()), Some("INV-0001.pdf"));
    let bytes = std::fs::read(&dest).expect("read file");
    assert!(bytes.starts_with(b"%PDF"));

    // The staging file used during the download must be gone
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .map(|e| e.expect("entry").file_name())
        .collect();
    assert_eq!(leftovers, vec!["INV-0001.pdf"]);
}

#[tokio::test]
async fn aborted_download_leaves_no_file_behind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/invoices/inv_7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "inv_7",
                "invoiceNumber": "INV-0007",
                "orderId": "ord_7",
                "status": "ISSUED",
                "total": "10.00",
                "issuedAt": "2026-02-01T09:30:00Z"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/invoices/inv_7/pdf"))
        .respond_with(ResponseTemplate::new(500).set_body_string("pdf renderer crashed"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    client_for(&server)
        .download_invoice_pdf(&"inv_7".into(), dir.path())
        .await
        .expect_err("should fail");

    let leftovers = std::fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(leftovers, 0);
}

#[tokio::test]
async fn missing_invoice_surfaces_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/invoices/inv_404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": {"code": "NOT_FOUND", "message": "Factura no encontrada"}
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let err = client_for(&server)
        .download_invoice_pdf(&"inv_404".into(), dir.path())
        .await
        .expect_err("should fail");
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.to_string(), "Factura no encontrada");
}

// =============================================================================
// Uploads
// =============================================================================

#[tokio::test]
async fn upload_sends_multipart_not_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload/image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"path": "/uploads/products/nueva.jpg"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("nueva.jpg");
    std::fs::write(&file, b"\xFF\xD8\xFF fake jpeg").expect("write");

    let uploaded = client_for(&server).upload_image(&file).await.expect("upload");
    assert_eq!(uploaded.path, "/uploads/products/nueva.jpg");

    let requests = server.received_requests().await.expect("requests");
    let upload = requests
        .iter()
        .find(|r| r.url.path() == "/api/upload/image")
        .expect("upload request");
    let content_type = upload
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn unsupported_upload_type_is_rejected_locally() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("factura.pdf");
    std::fs::write(&file, b"%PDF").expect("write");

    let err = client_for(&server)
        .upload_image(&file)
        .await
        .expect_err("should fail");
    assert_eq!(err.code(), "VALIDATION_ERROR");
}
