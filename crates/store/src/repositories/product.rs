//! Product repository.

use chrono::Utc;
use invoicer_core::product::{
    CreateProductInput, Product, ProductFilter, UpdateProductInput, categories,
};
use invoicer_shared::types::ProductId;
use tracing::info;

use crate::collection::{Collection, Record};
use crate::error::StoreError;
use crate::latency::SimulatedLatency;

impl Record for Product {
    type Id = ProductId;
    const KIND: &'static str = "product";

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Product repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    products: Collection<Product>,
    latency: SimulatedLatency,
}

impl ProductRepository {
    /// Creates a new product repository.
    #[must_use]
    pub const fn new(products: Collection<Product>, latency: SimulatedLatency) -> Self {
        Self { products, latency }
    }

    /// Creates a product and prepends it.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is invalid.
    pub async fn create(&self, input: CreateProductInput) -> Result<Product, StoreError> {
        self.latency.wait().await;
        let product = Product::create(input, Utc::now())?;
        info!(
            product_id = %product.id,
            name = %product.name,
            price = %product.price,
            "Product created"
        );
        Ok(self.products.prepend(product).await)
    }

    /// Merges supplied fields into the product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the result is invalid.
    pub async fn update(
        &self,
        id: ProductId,
        input: UpdateProductInput,
    ) -> Result<Product, StoreError> {
        self.latency.wait().await;
        let product = self
            .products
            .modify(id, |product| product.apply_update(input, Utc::now()))
            .await?;
        info!(product_id = %id, "Product updated");
        Ok(product)
    }

    /// Removes the product. Existing document rows are not affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist.
    pub async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        self.latency.wait().await;
        self.products.remove(id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Finds a product by ID.
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.products.get(id).await
    }

    /// Lists products matching the filter, in the filter's sort order.
    pub async fn list(&self, filter: &ProductFilter) -> Vec<Product> {
        filter.apply(self.products.all().await)
    }

    /// Distinct categories in use.
    pub async fn categories(&self) -> Vec<String> {
        categories(&self.products.all().await)
    }

    /// Number of products.
    pub async fn count(&self) -> usize {
        self.products.len().await
    }
}
