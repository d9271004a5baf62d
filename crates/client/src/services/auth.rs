//! Authentication operations.
//!
//! A successful login stores the bearer token in the session; every
//! subsequent request carries it. Logout tells the backend best-effort
//! and always clears the local token.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use velasona_core::{Profile, User};

use crate::error::ApiResult;
use crate::http::StoreClient;

/// Input for registering a new account.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// Successful auth response: the bearer token plus the account it belongs to.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl StoreClient {
    /// Register a new account. `POST /auth/register`
    ///
    /// The returned token is stored in the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the registration or the
    /// token cannot be persisted.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: &RegisterInput) -> ApiResult<AuthPayload> {
        let payload: AuthPayload = self
            .post("/auth/register", input)
            .await
            .map_err(|e| e.with_fallback("Registration failed"))?;
        self.session().set_token(&payload.token)?;
        Ok(payload)
    }

    /// Log in with email and password. `POST /auth/login`
    ///
    /// The returned token is stored in the session so subsequent calls
    /// send `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the token
    /// cannot be persisted.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthPayload> {
        let payload: AuthPayload = self
            .post("/auth/login", &CredentialsBody { email, password })
            .await
            .map_err(|e| e.with_fallback("Login failed"))?;
        self.session().set_token(&payload.token)?;
        Ok(payload)
    }

    /// Log out. `POST /auth/logout`
    ///
    /// The backend call is best-effort; the local token is cleared either
    /// way.
    ///
    /// # Errors
    ///
    /// Returns an error only if clearing the local token fails.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> ApiResult<()> {
        if let Err(e) = self.post_unit("/auth/logout", &serde_json::json!({})).await {
            warn!(error = %e, "logout request failed, clearing local token anyway");
        }
        self.session().clear_token()?;
        Ok(())
    }

    /// The account behind the current token. `GET /auth/me`
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or rejected.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> ApiResult<User> {
        self.get("/auth/me")
            .await
            .map_err(|e| e.with_fallback("Failed to load account"))
    }
}
