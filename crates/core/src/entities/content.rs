//! Review, subscription, audio, and wishlist records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    AudioContentId, ProductId, ReviewId, SubscriptionId, SubscriptionStatus, UserId,
    WishlistItemId,
};

/// A product review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    /// Star rating, 1-5.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// The user's audio-wellness subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: SubscriptionId,
    /// Backend-defined plan identifier (e.g., `monthly`, `annual`).
    pub plan: String,
    pub status: SubscriptionStatus,
    pub current_period_end: DateTime<Utc>,
}

/// An audio-wellness track or session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioContent {
    pub id: AudioContentId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration_seconds: u32,
    /// Backend-internal storage path; resolve through the client's media
    /// helpers before playback.
    pub file_path: String,
    #[serde(default)]
    pub requires_subscription: bool,
}

/// One saved product on the user's wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub product_id: ProductId,
    pub added_at: DateTime<Utc>,
}
