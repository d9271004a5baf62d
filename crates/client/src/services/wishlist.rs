//! Wishlist operations.

use serde::Serialize;
use tracing::instrument;

use velasona_core::{ProductId, WishlistItem};

use crate::error::ApiResult;
use crate::http::StoreClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WishlistBody<'a> {
    product_id: &'a ProductId,
}

impl StoreClient {
    /// The current user's wishlist. `GET /wishlist/me`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn wishlist(&self) -> ApiResult<Vec<WishlistItem>> {
        self.get("/wishlist/me")
            .await
            .map_err(|e| e.with_fallback("Failed to load wishlist"))
    }

    /// Save a product to the wishlist. `POST /wishlist/items`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_to_wishlist(&self, product_id: &ProductId) -> ApiResult<WishlistItem> {
        self.post("/wishlist/items", &WishlistBody { product_id })
            .await
            .map_err(|e| e.with_fallback("Failed to add to wishlist"))
    }

    /// Remove a product from the wishlist. `DELETE /wishlist/items/:productId`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_from_wishlist(&self, product_id: &ProductId) -> ApiResult<()> {
        self.delete_unit(&format!("/wishlist/items/{product_id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to remove from wishlist"))
    }
}
