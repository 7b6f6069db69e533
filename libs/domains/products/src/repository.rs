use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Repository trait for Product persistence, keyed by SKU
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product; `DuplicateSku` when the SKU is taken
    async fn save(&self, product: &Product) -> ProductResult<()>;

    /// `NotFound` when no product has this SKU
    async fn get_by_sku(&self, sku: &str) -> ProductResult<Product>;

    /// All products, ordered by SKU
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Replace the row stored under `old_sku`; the SKU itself may change
    async fn update(&self, old_sku: &str, product: &Product) -> ProductResult<Product>;

    async fn delete(&self, sku: &str) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<String, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if products.contains_key(&product.sku) {
            return Err(ProductError::DuplicateSku(product.sku.clone()));
        }

        products.insert(product.sku.clone(), product.clone());
        tracing::info!(sku = %product.sku, "Created product");
        Ok(())
    }

    async fn get_by_sku(&self, sku: &str) -> ProductResult<Product> {
        let products = self.products.read().await;
        products
            .get(sku)
            .cloned()
            .ok_or_else(|| ProductError::NotFound(sku.to_string()))
    }

    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn update(&self, old_sku: &str, product: &Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if !products.contains_key(old_sku) {
            return Err(ProductError::NotFound(old_sku.to_string()));
        }
        if product.sku != old_sku && products.contains_key(&product.sku) {
            return Err(ProductError::DuplicateSku(product.sku.clone()));
        }

        products.remove(old_sku);
        products.insert(product.sku.clone(), product.clone());

        tracing::info!(old_sku, sku = %product.sku, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, sku: &str) -> ProductResult<()> {
        let mut products = self.products.write().await;

        match products.remove(sku) {
            Some(_) => {
                tracing::info!(sku, "Deleted product");
                Ok(())
            }
            None => Err(ProductError::NotFound(sku.to_string())),
        }
    }
}
