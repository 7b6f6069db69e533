use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use tracing::instrument;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

/// PostgreSQL-backed ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Unique violations on the primary key surface as `DuplicateSku`.
fn map_write_error(err: DbErr, sku: &str) -> ProductError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ProductError::DuplicateSku(sku.to_string()),
        _ => ProductError::Database(err.to_string()),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self, product), fields(sku = %product.sku))]
    async fn save(&self, product: &Product) -> ProductResult<()> {
        entity::Entity::insert(entity::ActiveModel::for_insert(product))
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| map_write_error(e, &product.sku))?;

        tracing::info!("Created product");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_by_sku(&self, sku: &str) -> ProductResult<Product> {
        entity::Entity::find_by_id(sku.to_string())
            .one(&self.db)
            .await?
            .map(Product::try_from)
            .transpose()?
            .ok_or_else(|| ProductError::NotFound(sku.to_string()))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Sku)
            .all(&self.db)
            .await?;

        models.into_iter().map(Product::try_from).collect()
    }

    #[instrument(skip(self, product), fields(new_sku = %product.sku))]
    async fn update(&self, old_sku: &str, product: &Product) -> ProductResult<Product> {
        let result = entity::Entity::update_many()
            .set(entity::ActiveModel::for_update(product))
            .filter(entity::Column::Sku.eq(old_sku))
            .exec(&self.db)
            .await
            .map_err(|e| map_write_error(e, &product.sku))?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(old_sku.to_string()));
        }

        tracing::info!("Updated product");
        self.get_by_sku(&product.sku).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, sku: &str) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(sku.to_string())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(sku.to_string()));
        }

        tracing::info!("Deleted product");
        Ok(())
    }
}
