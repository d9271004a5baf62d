//! Audio-wellness subscription operations.
//!
//! Entitlement decisions (which audio requires a subscription, whether
//! the current one grants access) are entirely server-side.

use serde::Serialize;
use tracing::instrument;

use velasona_core::Subscription;

use crate::error::ApiResult;
use crate::http::StoreClient;

#[derive(Serialize)]
struct PlanBody<'a> {
    plan: &'a str,
}

impl StoreClient {
    /// The current user's subscription. `GET /subscriptions/me`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; a `NOT_FOUND` code means no
    /// subscription exists.
    #[instrument(skip(self))]
    pub async fn subscription(&self) -> ApiResult<Subscription> {
        self.get("/subscriptions/me")
            .await
            .map_err(|e| e.with_fallback("Failed to load subscription"))
    }

    /// Start a subscription. `POST /subscriptions`
    ///
    /// `plan` is a backend-defined identifier (e.g., `monthly`, `annual`).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the plan or payment.
    #[instrument(skip(self))]
    pub async fn subscribe(&self, plan: &str) -> ApiResult<Subscription> {
        self.post("/subscriptions", &PlanBody { plan })
            .await
            .map_err(|e| e.with_fallback("Failed to start subscription"))
    }

    /// Cancel the current subscription. `POST /subscriptions/me/cancel`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn cancel_subscription(&self) -> ApiResult<Subscription> {
        self.post("/subscriptions/me/cancel", &serde_json::json!({}))
            .await
            .map_err(|e| e.with_fallback("Failed to cancel subscription"))
    }

    /// Pause the current subscription. `POST /subscriptions/me/pause`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn pause_subscription(&self) -> ApiResult<Subscription> {
        self.post("/subscriptions/me/pause", &serde_json::json!({}))
            .await
            .map_err(|e| e.with_fallback("Failed to pause subscription"))
    }

    /// Resume a paused subscription. `POST /subscriptions/me/resume`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn resume_subscription(&self) -> ApiResult<Subscription> {
        self.post("/subscriptions/me/resume", &serde_json::json!({}))
            .await
            .map_err(|e| e.with_fallback("Failed to resume subscription"))
    }
}
