use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Product use cases consumed by the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductUseCases: Send + Sync {
    async fn create_product(&self, product: Product) -> ProductResult<Product>;

    async fn find_by_sku(&self, sku: &str) -> ProductResult<Product>;

    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Replace the product stored under `old_sku` with `candidate`
    async fn update_product(&self, old_sku: &str, candidate: Product) -> ProductResult<Product>;

    async fn delete_product(&self, sku: &str) -> ProductResult<()>;
}

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// `DuplicateSku` when `sku` is already stored.
    async fn ensure_sku_free(&self, sku: &str) -> ProductResult<()> {
        match self.repository.get_by_sku(sku).await {
            Ok(_) => Err(ProductError::DuplicateSku(sku.to_string())),
            Err(ProductError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductUseCases for ProductService<R> {
    #[instrument(skip(self, product), fields(sku = %product.sku))]
    async fn create_product(&self, product: Product) -> ProductResult<Product> {
        product.is_valid()?;

        // The primary key still decides if two creates race past this check
        self.ensure_sku_free(&product.sku).await?;

        self.repository.save(&product).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_sku(&self, sku: &str) -> ProductResult<Product> {
        self.repository.get_by_sku(sku).await
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    #[instrument(skip(self, candidate), fields(new_sku = %candidate.sku))]
    async fn update_product(&self, old_sku: &str, candidate: Product) -> ProductResult<Product> {
        let current = self.repository.get_by_sku(old_sku).await?;

        if current == candidate {
            tracing::debug!("No changes, skipping write");
            return Ok(current);
        }

        candidate.is_valid()?;

        if candidate.sku != old_sku {
            self.ensure_sku_free(&candidate.sku).await?;
        }

        let updated = self.repository.update(old_sku, &candidate).await?;

        updated.is_valid().map_err(|e| {
            tracing::error!(error = %e, "Stored product failed validation");
            ProductError::Internal(format!("updated product is invalid: {e}"))
        })?;

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, sku: &str) -> ProductResult<()> {
        self.repository.delete(sku).await
    }
}
