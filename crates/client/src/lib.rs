//! Typed API client for the Velasona storefront backend.
//!
//! The backend owns all business logic - pricing, payments, inventory,
//! auth decisions, entitlements. This crate is the typed surface the
//! frontend uses to talk to it:
//!
//! - **HTTP core**: one [`StoreClient`] wrapping `reqwest`, injecting the
//!   bearer token and normalizing the `{success, data, error}` envelope
//!   into `Result` values.
//! - **Session store**: the bearer token and language preference under
//!   fixed keys in a JSON file (the browser-storage analog).
//! - **Service modules**: one per resource family (auth, cart, orders,
//!   products, reviews, subscriptions, users, wishlist, audio, invoices,
//!   analytics, uploads), each mapping one-to-one to backend endpoints.
//! - **Media helpers**: pure path rewrites for product images and audio
//!   streaming URLs.
//!
//! Failure semantics: a failed call surfaces as an [`ApiError`] with a
//! human-readable message. No retries, no backoff - retry decisions
//! belong to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use velasona_client::{ProductFilter, StoreClient};
//! use velasona_core::ProductCategory;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StoreClient::from_env()?;
//!
//!     client.login("cliente@velasona.shop", "secret").await?;
//!
//!     let filter = ProductFilter {
//!         category: Some(ProductCategory::Candles),
//!         page: Some(1),
//!         limit: Some(10),
//!         ..ProductFilter::default()
//!     };
//!     let page = client.products(&filter).await?;
//!     for product in &page.items {
//!         println!("{} - {}", product.name(client.language()), product.price);
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod http;
pub mod media;
pub mod services;
pub mod session;

pub use config::{ClientConfig, ConfigError, DEFAULT_API_URL};
pub use error::{ApiError, ApiResult};
pub use http::StoreClient;
pub use media::{FALLBACK_IMAGE, resolve_image, resolve_stream_url};
pub use services::{
    AddressInput, AnalyticsRange, AnalyticsSummary, AuthPayload, CheckoutInput, OrderFilter,
    ProductFilter, ProductInput, ProfileInput, RegisterInput, TopProduct, UploadedImage,
    UserFilter,
};
pub use session::{SessionStore, SessionStoreError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ClientConfig;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::http::StoreClient;
    pub use crate::services::{
        AnalyticsRange, CheckoutInput, ProductFilter, ProfileInput, RegisterInput, UserFilter,
    };
    pub use crate::session::SessionStore;
}
