use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ProductError;
use crate::factory;

pub const SKU_PREFIX: &str = "FAL";
pub const SKU_MIN: u32 = 1_000_000;
pub const SKU_MAX: u32 = 9_999_999;
pub const PRICE_MIN: f64 = 1.00;
pub const PRICE_MAX: f64 = 99_999_999.00;
pub const DEFAULT_SIZE: &str = "ST";

pub const NAME_MIN_LEN: u64 = 3;
pub const NAME_MAX_LEN: u64 = 50;
pub const SIZE_MIN_LEN: u64 = 1;
pub const SIZE_MAX_LEN: u64 = 15;

/// Catalog product, keyed by SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// `FAL-` followed by seven digits
    #[schema(example = "FAL-1000000")]
    pub sku: String,
    #[schema(example = "Polera")]
    pub name: String,
    #[schema(example = "CAT")]
    pub brand: String,
    #[schema(example = "XL")]
    pub size: String,
    #[schema(example = 20000.0)]
    pub price: f64,
    #[schema(example = "https://images.example.com/polera.jpg")]
    pub principal_image: String,
    pub other_images: Vec<String>,
}

impl Product {
    /// Check the entity rules; see [`crate::validation::validate_product`].
    pub fn is_valid(&self) -> Result<(), ProductError> {
        crate::validation::validate_product(self)
    }
}

/// Request body for create and replace
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProductRequest {
    #[schema(example = "FAL-1000000")]
    pub sku: String,
    #[schema(example = "Polera")]
    pub name: String,
    #[schema(example = "CAT")]
    pub brand: String,
    /// Defaults to `ST` when blank or omitted
    #[serde(default)]
    #[schema(example = "XL")]
    pub size: String,
    #[schema(example = 20000.0)]
    pub price: f64,
    #[schema(example = "https://images.example.com/polera.jpg")]
    pub principal_image: String,
    #[serde(default)]
    pub other_images: Vec<String>,
}

impl TryFrom<ProductRequest> for Product {
    type Error = ProductError;

    fn try_from(req: ProductRequest) -> Result<Self, Self::Error> {
        factory::construct(
            req.sku,
            req.name,
            req.brand,
            req.size,
            req.price,
            req.principal_image,
            req.other_images,
        )
    }
}
