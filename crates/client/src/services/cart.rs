//! Cart operations.
//!
//! Every mutation returns the updated cart so callers can re-render
//! without a second fetch.

use serde::Serialize;
use tracing::instrument;

use velasona_core::{Cart, CartItemId, ProductId};

use crate::error::ApiResult;
use crate::http::StoreClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddItemBody<'a> {
    product_id: &'a ProductId,
    quantity: u32,
}

#[derive(Serialize)]
struct QuantityBody {
    quantity: u32,
}

impl StoreClient {
    /// The current user's cart. `GET /cart`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> ApiResult<Cart> {
        self.get("/cart")
            .await
            .map_err(|e| e.with_fallback("Failed to load cart"))
    }

    /// Add a product to the cart. `POST /cart/items`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (e.g., product out of stock).
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_to_cart(&self, product_id: &ProductId, quantity: u32) -> ApiResult<Cart> {
        let body = AddItemBody {
            product_id,
            quantity,
        };
        self.post("/cart/items", &body)
            .await
            .map_err(|e| e.with_fallback("Failed to add to cart"))
    }

    /// Change a cart line's quantity. `PUT /cart/items/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(item_id = %item_id))]
    pub async fn update_cart_item(&self, item_id: &CartItemId, quantity: u32) -> ApiResult<Cart> {
        self.put(&format!("/cart/items/{item_id}"), &QuantityBody { quantity })
            .await
            .map_err(|e| e.with_fallback("Failed to update cart"))
    }

    /// Remove a cart line. `DELETE /cart/items/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(item_id = %item_id))]
    pub async fn remove_from_cart(&self, item_id: &CartItemId) -> ApiResult<Cart> {
        self.delete(&format!("/cart/items/{item_id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to remove from cart"))
    }

    /// Empty the cart. `DELETE /cart`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> ApiResult<()> {
        self.delete_unit("/cart")
            .await
            .map_err(|e| e.with_fallback("Failed to clear cart"))
    }
}
