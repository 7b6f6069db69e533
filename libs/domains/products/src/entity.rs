use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ProductError;
use crate::models::Product;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sku: String,
    pub name: String,
    pub brand: String,
    pub size: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Text")]
    pub principal_image: String,
    pub other_images: Json, // JSON array of URLs
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fails with `Internal` when `other_images` is not a JSON array of strings.
impl TryFrom<Model> for Product {
    type Error = ProductError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let other_images: Vec<String> =
            serde_json::from_value(model.other_images).map_err(|e| {
                tracing::error!(sku = %model.sku, error = %e, "Corrupt other_images column");
                ProductError::Internal(format!(
                    "stored other_images for {} are not a list of urls: {e}",
                    model.sku
                ))
            })?;

        Ok(Self {
            sku: model.sku,
            name: model.name,
            brand: model.brand,
            size: model.size,
            price: model.price,
            principal_image: model.principal_image,
            other_images,
        })
    }
}

impl ActiveModel {
    /// Fresh row for `product`, both timestamps set to now.
    pub fn for_insert(product: &Product) -> Self {
        let now: DateTimeWithTimeZone = Utc::now().into();
        Self {
            created_at: Set(now),
            updated_at: Set(now),
            ..Self::for_update(product)
        }
    }

    /// Every domain column plus a new `updated_at`; `created_at` is left alone.
    pub fn for_update(product: &Product) -> Self {
        Self {
            sku: Set(product.sku.clone()),
            name: Set(product.name.clone()),
            brand: Set(product.brand.clone()),
            size: Set(product.size.clone()),
            price: Set(product.price),
            principal_image: Set(product.principal_image.clone()),
            other_images: Set(Json::from(product.other_images.clone())),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        }
    }
}
