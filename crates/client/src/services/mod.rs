//! Resource service modules, one per backend endpoint family.
//!
//! Each module is an `impl StoreClient` block exposing typed operations
//! that map one-to-one to backend REST endpoints. Every operation:
//!
//! 1. Builds the endpoint path, appending query parameters where needed.
//! 2. Calls the HTTP core with the right verb and body.
//! 3. Unwraps the envelope, attaching a resource-specific fallback
//!    message for unstructured failures.
//!
//! No operation retries; retry decisions belong to the caller.

pub mod analytics;
pub mod audio;
pub mod auth;
pub mod cart;
pub mod invoices;
pub mod orders;
pub mod products;
pub mod profile;
pub mod reviews;
pub mod subscriptions;
pub mod uploads;
pub mod users;
pub mod wishlist;

pub use analytics::{AnalyticsRange, AnalyticsSummary, TopProduct};
pub use auth::{AuthPayload, RegisterInput};
pub use orders::{CheckoutInput, OrderFilter};
pub use products::{ProductFilter, ProductInput};
pub use profile::{AddressInput, ProfileInput};
pub use uploads::UploadedImage;
pub use users::UserFilter;

use velasona_core::PageInfo;

/// Log a pagination-consistency violation.
///
/// `has_more` must equal `page < total_pages`; the backend owns the data,
/// so the client reports the inconsistency and passes the page through.
pub(crate) fn check_pagination(info: &PageInfo, resource: &str) {
    if !info.is_consistent() {
        tracing::warn!(
            resource,
            page = info.page,
            total_pages = info.total_pages,
            has_more = info.has_more,
            "inconsistent pagination metadata from backend"
        );
    }
}
