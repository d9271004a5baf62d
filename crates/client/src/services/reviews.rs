//! Product review operations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use velasona_core::{Page, PageInfo, ProductId, Review, ReviewId};

use crate::error::{ApiError, ApiResult};
use crate::http::{QueryPairs, StoreClient};
use crate::services::check_pagination;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewBody<'a> {
    product_id: &'a ProductId,
    rating: u8,
    comment: &'a str,
}

/// Wire shape of review listings (resource-specific plural key).
#[derive(Deserialize)]
struct ReviewListWire {
    reviews: Vec<Review>,
    pagination: PageInfo,
}

impl StoreClient {
    /// Reviews for a product. `GET /reviews/product/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn product_reviews(
        &self,
        product_id: &ProductId,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult<Page<Review>> {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("page", page);
        pairs.push_opt("limit", limit);
        let path = format!("/reviews/product/{product_id}{}", pairs.to_query_string());
        let wire: ReviewListWire = self
            .get(&path)
            .await
            .map_err(|e| e.with_fallback("Failed to load reviews"))?;
        check_pagination(&wire.pagination, "reviews");
        Ok(Page::new(wire.reviews, wire.pagination))
    }

    /// Submit a review. `POST /reviews`
    ///
    /// The rating must be 1-5; out-of-range values are rejected
    /// client-side before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range rating, or an API
    /// error if the backend rejects the review (e.g., product not
    /// purchased).
    #[instrument(skip(self, comment), fields(product_id = %product_id))]
    pub async fn submit_review(
        &self,
        product_id: &ProductId,
        rating: u8,
        comment: &str,
    ) -> ApiResult<Review> {
        if !(1..=5).contains(&rating) {
            return Err(ApiError::Validation(format!(
                "rating must be between 1 and 5, got {rating}"
            )));
        }

        let body = ReviewBody {
            product_id,
            rating,
            comment,
        };
        self.post("/reviews", &body)
            .await
            .map_err(|e| e.with_fallback("Failed to submit review"))
    }

    /// Delete one of the current user's reviews. `DELETE /reviews/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(review_id = %id))]
    pub async fn delete_review(&self, id: &ReviewId) -> ApiResult<()> {
        self.delete_unit(&format!("/reviews/{id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to delete review"))
    }
}
