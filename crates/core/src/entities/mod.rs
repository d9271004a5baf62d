//! Flat records mirroring backend resources.
//!
//! Every entity here is created, mutated, and destroyed exclusively
//! server-side; the client holds ephemeral copies fetched per-request.

pub mod catalog;
pub mod commerce;
pub mod content;
pub mod user;

pub use catalog::{LocalizedList, Product, ProductTranslations};
pub use commerce::{Cart, CartItem, Invoice, Order, OrderItem};
pub use content::{AudioContent, Review, Subscription, WishlistItem};
pub use user::{Address, Profile, User};
