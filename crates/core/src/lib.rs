//! Velasona Core - Shared types library.
//!
//! This crate provides common types used across all Velasona components:
//! - `client` - Typed API client for the storefront backend
//! - `cli` - Command-line front end for browsing, cart, and admin tasks
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every
//! entity here mirrors a backend resource; the backend is the single
//! source of truth and the client never derives cross-entity state.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, prices, and statuses
//! - [`entities`] - Flat records mirroring backend resources
//! - [`page`] - Pagination envelope shared by all list endpoints
//! - [`i18n`] - Language handling and the localized message catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entities;
pub mod i18n;
pub mod page;
pub mod types;

pub use entities::*;
pub use i18n::{Language, Localized, localize};
pub use page::{Page, PageInfo};
pub use types::*;
