//! Construction of [`Product`] values from raw input.
//!
//! The factory checks field bounds; SKU format and URL shape are left to
//! [`crate::validation`], which runs before every write.

use crate::error::{ProductError, ProductResult};
use crate::models::{
    DEFAULT_SIZE, NAME_MAX_LEN, NAME_MIN_LEN, Product, SIZE_MAX_LEN, SIZE_MIN_LEN,
};
use crate::validation::{check_length, check_price};

/// Build a product, rejecting out-of-range fields.
///
/// A blank `size` becomes `ST`. `other_images` is taken as given.
pub fn construct(
    sku: String,
    name: String,
    brand: String,
    size: String,
    price: f64,
    principal_image: String,
    other_images: Vec<String>,
) -> ProductResult<Product> {
    check_length("name", &name, NAME_MIN_LEN, NAME_MAX_LEN)?;
    check_length("brand", &brand, NAME_MIN_LEN, NAME_MAX_LEN)?;

    let size = if size.trim().is_empty() {
        DEFAULT_SIZE.to_string()
    } else {
        check_length("size", &size, SIZE_MIN_LEN, SIZE_MAX_LEN)?;
        size
    };

    check_price(price)?;

    if principal_image.trim().is_empty() {
        return Err(ProductError::Validation(
            "principal image url empty".to_string(),
        ));
    }

    Ok(Product {
        sku,
        name,
        brand,
        size,
        price,
        principal_image,
        other_images,
    })
}
