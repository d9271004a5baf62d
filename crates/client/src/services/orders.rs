//! Order operations: checkout, history, and admin management.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use velasona_core::{AddressId, Order, OrderId, OrderStatus, Page, PageInfo};

use crate::error::ApiResult;
use crate::http::{QueryPairs, StoreClient};
use crate::services::check_pagination;

/// Input for placing an order from the current cart.
///
/// The payment method is an opaque gateway token; the backend owns all
/// pricing and payment processing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    pub shipping_address_id: AddressId,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Admin filters for the full order listing.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl OrderFilter {
    fn to_query(&self) -> String {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("status", self.status.map(OrderStatus::as_wire));
        pairs.push_opt("page", self.page);
        pairs.push_opt("limit", self.limit);
        pairs.to_query_string()
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: OrderStatus,
}

/// Wire shape of order listings (resource-specific plural key).
#[derive(Deserialize)]
struct OrderListWire {
    orders: Vec<Order>,
    pagination: PageInfo,
}

impl StoreClient {
    /// Place an order from the current cart. `POST /orders`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the checkout (empty cart,
    /// payment declined, out-of-stock line).
    #[instrument(skip(self, input))]
    pub async fn checkout(&self, input: &CheckoutInput) -> ApiResult<Order> {
        self.post("/orders", input)
            .await
            .map_err(|e| e.with_fallback("Checkout failed"))
    }

    /// The current user's orders. `GET /orders`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn orders(&self, page: Option<u32>, limit: Option<u32>) -> ApiResult<Page<Order>> {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("page", page);
        pairs.push_opt("limit", limit);
        let wire: OrderListWire = self
            .get(&format!("/orders{}", pairs.to_query_string()))
            .await
            .map_err(|e| e.with_fallback("Failed to load orders"))?;
        check_pagination(&wire.pagination, "orders");
        Ok(Page::new(wire.orders, wire.pagination))
    }

    /// Fetch one of the current user's orders. `GET /orders/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is unknown.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn order(&self, id: &OrderId) -> ApiResult<Order> {
        self.get(&format!("/orders/{id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to load order"))
    }

    /// List all orders across users (admin). `GET /orders/admin/all`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks the
    /// admin role.
    #[instrument(skip(self))]
    pub async fn all_orders(&self, filter: &OrderFilter) -> ApiResult<Page<Order>> {
        let wire: OrderListWire = self
            .get(&format!("/orders/admin/all{}", filter.to_query()))
            .await
            .map_err(|e| e.with_fallback("Failed to load orders"))?;
        check_pagination(&wire.pagination, "orders");
        Ok(Page::new(wire.orders, wire.pagination))
    }

    /// Set an order's status (admin). `PUT /orders/admin/:id/status`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the transition is invalid
    /// server-side.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> ApiResult<Order> {
        self.put(&format!("/orders/admin/{id}/status"), &StatusBody { status })
            .await
            .map_err(|e| e.with_fallback("Failed to update order status"))
    }
}
