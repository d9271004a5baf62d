//! Product catalog operations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use velasona_core::{
    Page, PageInfo, Price, Product, ProductCategory, ProductId, ProductTranslations,
};

use crate::error::ApiResult;
use crate::http::{QueryPairs, StoreClient};
use crate::services::check_pagination;

/// Filters for the product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<ProductCategory>,
    pub in_stock: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProductFilter {
    fn to_query(&self) -> String {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("category", self.category.map(ProductCategory::as_query_value));
        pairs.push_opt("inStock", self.in_stock);
        pairs.push_opt("search", self.search.as_deref());
        pairs.push_opt("page", self.page);
        pairs.push_opt("limit", self.limit);
        pairs.to_query_string()
    }
}

/// Admin input for creating or replacing a product.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub category: ProductCategory,
    pub price: Price,
    #[serde(default)]
    pub images: Vec<String>,
    pub in_stock: bool,
    pub translations: ProductTranslations,
}

/// Wire shape of the product listing (resource-specific plural key).
#[derive(Deserialize)]
struct ProductListWire {
    products: Vec<Product>,
    pagination: PageInfo,
}

impl StoreClient {
    /// List products. `GET /products`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn products(&self, filter: &ProductFilter) -> ApiResult<Page<Product>> {
        let path = format!("/products{}", filter.to_query());
        let wire: ProductListWire = self
            .get(&path)
            .await
            .map_err(|e| e.with_fallback("Failed to load products"))?;
        check_pagination(&wire.pagination, "products");
        Ok(Page::new(wire.products, wire.pagination))
    }

    /// Fetch one product. `GET /products/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product is unknown.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn product(&self, id: &ProductId) -> ApiResult<Product> {
        self.get(&format!("/products/{id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to load product"))
    }

    /// Create a product (admin). `POST /products`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks the
    /// admin role.
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: &ProductInput) -> ApiResult<Product> {
        self.post("/products", input)
            .await
            .map_err(|e| e.with_fallback("Failed to create product"))
    }

    /// Replace a product (admin). `PUT /products/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks the
    /// admin role.
    #[instrument(skip(self, input), fields(product_id = %id))]
    pub async fn update_product(&self, id: &ProductId, input: &ProductInput) -> ApiResult<Product> {
        self.put(&format!("/products/{id}"), input)
            .await
            .map_err(|e| e.with_fallback("Failed to update product"))
    }

    /// Delete a product (admin). `DELETE /products/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks the
    /// admin role.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> ApiResult<()> {
        self.delete_unit(&format!("/products/{id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to delete product"))
    }
}
