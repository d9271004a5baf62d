//! Status and category enums for backend entities.
//!
//! All variants use the backend's SCREAMING_SNAKE_CASE wire tokens. The
//! client passes these through unchanged - status transitions happen
//! exclusively server-side.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// The wire token for this role (e.g., `ADMIN`).
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Customer type on a profile, used for invoicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    #[default]
    Individual,
    Business,
}

/// Address kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressKind {
    #[default]
    Shipping,
    Billing,
}

/// Product catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Candles,
    Accessories,
    Sets,
}

impl ProductCategory {
    /// The wire token used in query strings (e.g., `category=CANDLES`).
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::Candles => "CANDLES",
            Self::Accessories => "ACCESSORIES",
            Self::Sets => "SETS",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The wire token for this status (e.g., `SHIPPED`).
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Subscription lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Paused,
    Cancelled,
}

impl SubscriptionStatus {
    /// The wire token for this status (e.g., `PAUSED`).
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Issued,
    Paid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_wire_tokens() {
        assert_eq!(
            serde_json::to_string(&ProductCategory::Candles).expect("serialize"),
            "\"CANDLES\""
        );
        assert_eq!(
            serde_json::to_string(&Role::Admin).expect("serialize"),
            "\"ADMIN\""
        );
        assert_eq!(
            serde_json::to_string(&CustomerType::Business).expect("serialize"),
            "\"BUSINESS\""
        );
    }

    #[test]
    fn deserializes_wire_tokens() {
        let status: OrderStatus = serde_json::from_str("\"SHIPPED\"").expect("deserialize");
        assert_eq!(status, OrderStatus::Shipped);

        let kind: AddressKind = serde_json::from_str("\"BILLING\"").expect("deserialize");
        assert_eq!(kind, AddressKind::Billing);
    }

    #[test]
    fn category_query_values_match_wire() {
        assert_eq!(ProductCategory::Candles.as_query_value(), "CANDLES");
        assert_eq!(ProductCategory::Accessories.as_query_value(), "ACCESSORIES");
        assert_eq!(ProductCategory::Sets.as_query_value(), "SETS");
    }
}
