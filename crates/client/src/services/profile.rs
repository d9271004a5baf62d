//! Profile and address operations.

use serde::Serialize;
use tracing::{instrument, warn};

use velasona_core::{Address, AddressId, AddressKind, CustomerType, Language, Profile};

use crate::error::ApiResult;
use crate::http::StoreClient;

/// Partial profile update; only provided fields change.
#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<CustomerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<Language>,
}

/// Input for creating or replacing an address.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub kind: AddressKind,
    pub street: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
}

impl StoreClient {
    /// The current user's profile. `GET /profile`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> ApiResult<Profile> {
        self.get("/profile")
            .await
            .map_err(|e| e.with_fallback("Failed to load profile"))
    }

    /// Update the current user's profile. `PUT /profile`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input))]
    pub async fn update_profile(&self, input: &ProfileInput) -> ApiResult<Profile> {
        self.put("/profile", input)
            .await
            .map_err(|e| e.with_fallback("Failed to update profile"))
    }

    /// The current user's addresses. `GET /profile/addresses`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn addresses(&self) -> ApiResult<Vec<Address>> {
        self.get("/profile/addresses")
            .await
            .map_err(|e| e.with_fallback("Failed to load addresses"))
    }

    /// Add an address. `POST /profile/addresses`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input))]
    pub async fn add_address(&self, input: &AddressInput) -> ApiResult<Address> {
        self.post("/profile/addresses", input)
            .await
            .map_err(|e| e.with_fallback("Failed to add address"))
    }

    /// Replace an address. `PUT /profile/addresses/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, input), fields(address_id = %id))]
    pub async fn update_address(&self, id: &AddressId, input: &AddressInput) -> ApiResult<Address> {
        self.put(&format!("/profile/addresses/{id}"), input)
            .await
            .map_err(|e| e.with_fallback("Failed to update address"))
    }

    /// Delete an address. `DELETE /profile/addresses/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(address_id = %id))]
    pub async fn delete_address(&self, id: &AddressId) -> ApiResult<()> {
        self.delete_unit(&format!("/profile/addresses/{id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to delete address"))
    }

    /// Change the display language.
    ///
    /// The preference persists locally first (it works logged-out); when a
    /// token is present the backend profile is updated best-effort.
    ///
    /// # Errors
    ///
    /// Returns an error only if the local preference cannot be persisted.
    #[instrument(skip(self))]
    pub async fn set_language(&self, language: Language) -> ApiResult<()> {
        self.session().set_language(language)?;

        if self.session().has_token() {
            let input = ProfileInput {
                preferred_language: Some(language),
                ..ProfileInput::default()
            };
            if let Err(e) = self.update_profile(&input).await {
                warn!(error = %e, "failed to sync language preference to backend");
            }
        }
        Ok(())
    }
}
