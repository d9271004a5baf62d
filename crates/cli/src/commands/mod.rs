//! Command implementations, grouped by surface area.

pub mod account;
pub mod admin;
pub mod auth;
pub mod orders;
pub mod shop;

use thiserror::Error;

use velasona_core::{ProductCategory, Role};

/// Errors from command-line argument values that clap cannot validate
/// itself.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Unknown category: {0}. Valid categories: candles, accessories, sets")]
    UnknownCategory(String),

    #[error("Unknown role: {0}. Valid roles: user, admin")]
    UnknownRole(String),
}

pub fn parse_category(value: &str) -> Result<ProductCategory, UsageError> {
    match value.to_ascii_lowercase().as_str() {
        "candles" => Ok(ProductCategory::Candles),
        "accessories" => Ok(ProductCategory::Accessories),
        "sets" => Ok(ProductCategory::Sets),
        _ => Err(UsageError::UnknownCategory(value.to_owned())),
    }
}

pub fn parse_role(value: &str) -> Result<Role, UsageError> {
    match value.to_ascii_lowercase().as_str() {
        "user" => Ok(Role::User),
        "admin" => Ok(Role::Admin),
        _ => Err(UsageError::UnknownRole(value.to_owned())),
    }
}
