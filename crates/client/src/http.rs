//! HTTP core: the store client and the response envelope.
//!
//! Every JSON endpoint answers with the same envelope:
//! `{ success, data?, error? }`. The core deserializes it and converts it
//! into `Result<T, ApiError>`; service modules add resource-specific
//! fallback messages on top. Failures are single-shot - no retry, no
//! backoff - so a caller-driven retry is always safe.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

// =============================================================================
// Envelope
// =============================================================================

/// The uniform `{success, data, error}` wrapper every backend response uses.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    error: Option<WireError>,
}

/// Server-side error payload inside the envelope.
#[derive(Debug, Deserialize)]
struct WireError {
    code: String,
    message: String,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

impl<T> Envelope<T> {
    /// Convert the envelope into a discriminated result.
    fn into_result(self, status: StatusCode) -> ApiResult<T> {
        if let Some(err) = self.error {
            return Err(ApiError::Api {
                code: err.code,
                message: err.message,
                details: err.details,
            });
        }

        if self.success {
            self.data.ok_or(ApiError::Unexpected {
                status: status.as_u16(),
                message: "response contained no data".to_owned(),
            })
        } else {
            Err(ApiError::unexpected(status.as_u16()))
        }
    }
}

/// Parse a raw response body as an envelope.
///
/// An envelope - even on a non-2xx status - wins over the HTTP status so
/// server error codes pass through unchanged. A body that is not an
/// envelope becomes `UNKNOWN_ERROR`.
pub(crate) fn parse_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> ApiResult<T> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) => envelope.into_result(status),
        Err(_) if !status.is_success() => Err(ApiError::unexpected(status.as_u16())),
        Err(_) => Err(ApiError::Unexpected {
            status: status.as_u16(),
            message: "invalid response from server".to_owned(),
        }),
    }
}

// =============================================================================
// Query strings
// =============================================================================

/// Ordered query-string builder.
///
/// Preserves insertion order and percent-encodes values, so
/// `{category: CANDLES, page: 1, limit: 10}` renders exactly as
/// `?category=CANDLES&page=1&limit=10`.
#[derive(Debug, Default)]
pub(crate) struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    pub(crate) const fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, key: &'static str, value: impl ToString) {
        self.0.push((key, value.to_string()));
    }

    pub(crate) fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Render as `?a=b&c=d`, or an empty string when no pairs were added.
    pub(crate) fn to_query_string(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect();
        format!("?{}", rendered.join("&"))
    }
}

// =============================================================================
// StoreClient
// =============================================================================

/// Client for the Velasona storefront backend.
///
/// Wraps `reqwest`, injects the bearer token from the session store, and
/// normalizes the response envelope. Service operations live in
/// `services/`, one module per resource family, all as `impl StoreClient`
/// blocks.
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<StoreClientInner>,
}

struct StoreClientInner {
    http: reqwest::Client,
    config: ClientConfig,
    session: SessionStore,
}

impl StoreClient {
    /// Create a client from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the session file
    /// cannot be read.
    pub fn from_env() -> ApiResult<Self> {
        let config = ClientConfig::from_env()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        Self::new(config)
    }

    /// Create a client with a specific configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the session
    /// file cannot be read.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let session = match &config.session_file {
            Some(path) => SessionStore::open(path)?,
            None => SessionStore::in_memory(),
        };
        Self::with_session(config, session)
    }

    /// Create a client with an externally managed session store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_session(config: ClientConfig, session: SessionStore) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("velasona-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            inner: Arc::new(StoreClientInner {
                http,
                config,
                session,
            }),
        })
    }

    /// The backend API base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.inner.config.api_url
    }

    /// The public media origin (images, audio).
    #[must_use]
    pub fn media_url(&self) -> &str {
        &self.inner.config.media_url
    }

    /// The session store backing this client.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// The display language from the session (default `es`).
    #[must_use]
    pub fn language(&self) -> velasona_core::Language {
        self.inner.session.language()
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request and unwrap the envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::GET, path, Option::<&()>::None).await
    }

    /// Perform a POST request with a JSON body and unwrap the envelope.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Perform a PUT request with a JSON body and unwrap the envelope.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Perform a DELETE request and unwrap the envelope.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::DELETE, path, Option::<&()>::None)
            .await
    }

    /// Perform a POST whose response carries no meaningful data.
    pub(crate) async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.request_ignore_data(Method::POST, path, Some(body))
            .await
    }

    /// Perform a DELETE whose response carries no meaningful data.
    pub(crate) async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        self.request_ignore_data(Method::DELETE, path, Option::<&()>::None)
            .await
    }

    /// Execute a request and parse the response envelope.
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let (status, text) = self.send(method, path, body).await?;
        parse_envelope(status, &text)
    }

    /// Execute a request where `data` is absent or irrelevant (deletes,
    /// logout). Server errors still surface.
    async fn request_ignore_data<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<()> {
        let (status, text) = self.send(method, path, body).await?;
        match parse_envelope::<serde_json::Value>(status, &text) {
            Ok(_) => Ok(()),
            // `{"success": true}` without data is fine here
            Err(ApiError::Unexpected { message, .. })
                if message == "response contained no data" =>
            {
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Send a request and collect the response body.
    ///
    /// The bearer token is read from the session store before each
    /// request; the content type for bodied requests is JSON (multipart
    /// uploads bypass this path entirely).
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<(StatusCode, String)> {
        let url = format!("{}{}", self.inner.config.api_url, path);
        debug!(method = %method, %url, "API request");

        let mut request = self.inner.http.request(method, &url);

        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token.expose_secret());
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::Network)?;
        Ok((status, text))
    }

    /// The raw reqwest client, for endpoints outside the JSON envelope
    /// (multipart uploads, binary downloads).
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// The current bearer token, if the session holds one.
    pub(crate) fn bearer(&self) -> Option<SecretString> {
        self.inner.session.token()
    }
}
