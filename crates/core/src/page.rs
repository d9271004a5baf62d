//! Pagination envelope shared by all list endpoints.
//!
//! List endpoints accept `page`/`limit` and respond with a page of items
//! plus a `pagination` block. Callers must drive "next page" affordances
//! from `has_more`/`total_pages`, never from the item count.

use serde::{Deserialize, Serialize};

/// Pagination metadata returned by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 1-based page number.
    pub page: u32,
    /// Requested page size.
    pub limit: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Whether a next page exists.
    pub has_more: bool,
}

impl PageInfo {
    /// Check the backend invariant `has_more == (page < total_pages)`.
    ///
    /// A violation means the backend produced inconsistent metadata; the
    /// client logs it and passes the data through rather than failing.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.has_more == (self.page < self.total_pages)
    }

    /// The next page number, if one exists.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_more { Some(self.page + 1) } else { None }
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}

impl<T> Page<T> {
    /// Build a page from a resource-specific wire payload.
    #[must_use]
    pub const fn new(items: Vec<T>, pagination: PageInfo) -> Self {
        Self { items, pagination }
    }

    /// Whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
