//! Shared harness for end-to-end client tests.
//!
//! Every test runs against a `wiremock` server that speaks the backend's
//! `{success, data, error}` envelope. No live backend is involved.
//!
//! Run with: `cargo test -p velasona-integration-tests`

#![cfg_attr(not(test), forbid(unsafe_code))]

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use velasona_client::{ClientConfig, StoreClient};

/// A mock backend plus a client wired to it through an on-disk session
/// file, like the real CLI.
pub struct TestContext {
    pub server: MockServer,
    pub client: StoreClient,
    session_dir: TempDir,
}

impl TestContext {
    /// Start a mock backend and a client pointed at it.
    ///
    /// # Panics
    ///
    /// Panics on harness setup failures.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let session_dir = TempDir::new().expect("create session dir");
        let client = Self::client_for(&server, &session_dir);
        Self {
            server,
            client,
            session_dir,
        }
    }

    /// A second client sharing this context's session file, as a separate
    /// process invocation would.
    #[must_use]
    pub fn reopened_client(&self) -> StoreClient {
        Self::client_for(&self.server, &self.session_dir)
    }

    fn client_for(server: &MockServer, session_dir: &TempDir) -> StoreClient {
        let config = ClientConfig::new(&format!("{}/api", server.uri()))
            .expect("config")
            .with_session_file(session_dir.path().join("session.json"));
        StoreClient::new(config).expect("client")
    }

    /// Mount a successful envelope response.
    pub async fn mock_ok(&self, http_method: &str, route: &str, data: Value) {
        Mock::given(method(http_method))
            .and(path(format!("/api{route}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": data})),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a failing envelope response.
    pub async fn mock_err(&self, http_method: &str, route: &str, status: u16, code: &str, message: &str) {
        Mock::given(method(http_method))
            .and(path(format!("/api{route}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "success": false,
                "error": {"code": code, "message": message}
            })))
            .mount(&self.server)
            .await;
    }
}

/// A login payload for `data` in the auth responses.
#[must_use]
pub fn login_payload(token: &str) -> Value {
    json!({
        "token": token,
        "user": user_fixture("usr_1", "cliente@velasona.shop", "USER")
    })
}

/// A minimal user entity.
#[must_use]
pub fn user_fixture(id: &str, email: &str, role: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "role": role,
        "createdAt": "2026-01-10T12:00:00Z",
        "updatedAt": "2026-01-10T12:00:00Z"
    })
}

/// A one-product catalog page.
#[must_use]
pub fn product_page_fixture() -> Value {
    json!({
        "products": [product_fixture("prod_1", "24.50")],
        "pagination": {"page": 1, "limit": 10, "total": 1, "totalPages": 1, "hasMore": false}
    })
}

/// A minimal product entity.
#[must_use]
pub fn product_fixture(id: &str, price: &str) -> Value {
    json!({
        "id": id,
        "category": "CANDLES",
        "price": price,
        "images": ["/uploads/products/lavanda.jpg"],
        "inStock": true,
        "translations": {
            "name": {"es": "Vela de lavanda", "en": "Lavender candle"},
            "description": {"es": "Aroma relajante", "en": "Relaxing scent"}
        }
    })
}

/// A one-line cart totalling `total`.
#[must_use]
pub fn cart_fixture(total: &str) -> Value {
    json!({
        "items": [{
            "id": "ci_1",
            "productId": "prod_1",
            "name": "Vela de lavanda",
            "unitPrice": "24.50",
            "quantity": 2
        }],
        "total": total
    })
}

/// A minimal order entity.
#[must_use]
pub fn order_fixture(id: &str, status: &str, total: &str) -> Value {
    json!({
        "id": id,
        "status": status,
        "items": [{
            "productId": "prod_1",
            "name": "Vela de lavanda",
            "unitPrice": "24.50",
            "quantity": 2
        }],
        "total": total,
        "createdAt": "2026-02-01T09:30:00Z"
    })
}
