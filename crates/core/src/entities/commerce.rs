//! Cart, order, and invoice records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::user::Address;
use crate::types::{CartItemId, InvoiceId, InvoiceStatus, OrderId, OrderStatus, Price, ProductId};

/// The current user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: Price,
}

impl Cart {
    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// One line in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    /// Product name snapshot in the shopper's language at add time.
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    pub created_at: DateTime<Utc>,
}

/// One line in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

/// An invoice issued for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    /// Human-facing sequential number (e.g., `INV-0001`), used as the
    /// PDF file name when downloading.
    pub invoice_number: String,
    pub order_id: OrderId,
    pub status: InvoiceStatus,
    pub total: Price,
    pub issued_at: DateTime<Utc>,
}
