//! Price type backed by decimal arithmetic.
//!
//! The backend serializes every monetary amount as a string decimal
//! (e.g., `"19.99"`) to avoid floating point drift in JSON. `Price`
//! deserializes that wire form into a [`rust_decimal::Decimal`].

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the shop currency.
///
/// Serialized as a string decimal on the wire. Currency is implicit -
/// the backend owns pricing and quotes everything in a single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::str")] Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// A zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}
