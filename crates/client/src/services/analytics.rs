//! Admin analytics.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use velasona_core::{Price, ProductId};

use crate::error::ApiResult;
use crate::http::{QueryPairs, StoreClient};

/// Optional date range for the analytics summary (inclusive).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AnalyticsRange {
    fn to_query(self) -> String {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("from", self.from);
        pairs.push_opt("to", self.to);
        pairs.to_query_string()
    }
}

/// Back-office analytics summary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_revenue: Price,
    pub total_orders: u64,
    pub new_customers: u64,
    pub active_subscriptions: u64,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
}

/// One row of the best-sellers table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: ProductId,
    pub name: String,
    pub units_sold: u32,
    pub revenue: Price,
}

impl StoreClient {
    /// The analytics summary (admin). `GET /admin/analytics`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks the
    /// admin role.
    #[instrument(skip(self))]
    pub async fn analytics(&self, range: AnalyticsRange) -> ApiResult<AnalyticsSummary> {
        self.get(&format!("/admin/analytics{}", range.to_query()))
            .await
            .map_err(|e| e.with_fallback("Failed to load analytics"))
    }
}
