//! Entity rules checked before every write and after every update.

use regex::Regex;
use std::sync::LazyLock;
use validator::{ValidateLength, ValidateRange};

use crate::error::{ProductError, ProductResult};
use crate::models::{
    NAME_MAX_LEN, NAME_MIN_LEN, PRICE_MAX, PRICE_MIN, Product, SIZE_MAX_LEN, SIZE_MIN_LEN,
    SKU_MAX, SKU_MIN, SKU_PREFIX,
};

static SKU_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{SKU_PREFIX}-(\d{{7}})$")).unwrap());

/// Scheme optional, a host-like fragment required.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:[^@/\n]+@)?(?:www\.)?([^:/\n]+)").unwrap()
});

/// `FAL-` plus seven digits in [1000000, 9999999].
pub fn is_valid_sku(sku: &str) -> bool {
    SKU_PATTERN
        .captures(sku)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .is_some_and(|n| (SKU_MIN..=SKU_MAX).contains(&n))
}

/// Loose image URL check shared by the principal and secondary images.
pub fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

/// `<field> must be between <min> and <max>` unless `value` has `min..=max` chars.
pub(crate) fn check_length(field: &str, value: &str, min: u64, max: u64) -> ProductResult<()> {
    if !value.validate_length(Some(min), Some(max), None) {
        return Err(ProductError::Validation(format!(
            "{field} must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// Price must lie in `(PRICE_MIN, PRICE_MAX]`.
pub(crate) fn check_price(price: f64) -> ProductResult<()> {
    // NaN compares false against both bounds
    if price.is_nan() || !price.validate_range(None, Some(PRICE_MAX), Some(PRICE_MIN), None) {
        return Err(ProductError::Validation(format!(
            "price must be between {PRICE_MIN:.2} and {PRICE_MAX:.2}"
        )));
    }
    Ok(())
}

/// Check `product` against the entity rules, stopping at the first failure.
///
/// The field bounds enforced by [`crate::factory::construct`] are checked last,
/// so a product built by hand cannot bypass them.
pub fn validate_product(product: &Product) -> ProductResult<()> {
    let fail = |msg: String| Err(ProductError::Validation(msg));

    if product.sku.trim().is_empty() {
        return fail("empty sku".into());
    }
    if !is_valid_sku(&product.sku) {
        return fail("invalid sku format (right format: FAL-XXXXXXX)".into());
    }
    if product.name.trim().is_empty() {
        return fail("empty name".into());
    }
    if product.brand.trim().is_empty() {
        return fail("empty brand".into());
    }
    if product.principal_image.trim().is_empty() {
        return fail("principal image url empty".into());
    }
    if !is_valid_url(&product.principal_image) {
        return fail("invalid URL format for principal image".into());
    }
    if product.price == 0.0 {
        return fail("price with zero value".into());
    }
    if let Some(url) = product.other_images.iter().find(|url| !is_valid_url(url)) {
        return fail(format!("url => {url} with wrong format"));
    }

    check_length("name", &product.name, NAME_MIN_LEN, NAME_MAX_LEN)?;
    check_length("brand", &product.brand, NAME_MIN_LEN, NAME_MAX_LEN)?;
    check_length("size", &product.size, SIZE_MIN_LEN, SIZE_MAX_LEN)?;
    check_price(product.price)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            sku: "FAL-1000000".to_string(),
            name: "Polera".to_string(),
            brand: "CAT".to_string(),
            size: "XL".to_string(),
            price: 20000.0,
            principal_image: "https://images.example.com/polera.jpg".to_string(),
            other_images: vec!["https://images.example.com/back.jpg".to_string()],
        }
    }

    fn message(product: &Product) -> String {
        validate_product(product).unwrap_err().to_string()
    }

    #[test]
    fn test_valid_product() {
        assert!(validate_product(&product()).is_ok());
        assert!(product().is_valid().is_ok());
    }

    #[test]
    fn test_sku_rules() {
        let mut p = product();

        p.sku = "   ".into();
        assert_eq!(message(&p), "empty sku");

        for bad in [
            "FAL-100000",
            "FAL-0999999",
            "FAL-10000000",
            "fal-1000000",
            "XFAL-1000000",
            "FAL-1000000x",
            "FAL1000000",
        ] {
            p.sku = bad.into();
            assert_eq!(
                message(&p),
                "invalid sku format (right format: FAL-XXXXXXX)",
                "{bad} should be rejected"
            );
        }

        for good in ["FAL-1000000", "FAL-9999999", "FAL-5432100"] {
            p.sku = good.into();
            assert!(validate_product(&p).is_ok(), "{good} should be accepted");
        }
    }

    #[test]
    fn test_blank_name_and_brand() {
        let mut p = product();
        p.name = "  ".into();
        assert_eq!(message(&p), "empty name");

        let mut p = product();
        p.brand = String::new();
        assert_eq!(message(&p), "empty brand");
    }

    #[test]
    fn test_principal_image_rules() {
        let mut p = product();
        p.principal_image = " ".into();
        assert_eq!(message(&p), "principal image url empty");

        p.principal_image = "://nohost".into();
        assert_eq!(message(&p), "invalid URL format for principal image");
    }

    #[test]
    fn test_zero_price() {
        let mut p = product();
        p.price = 0.0;
        assert_eq!(message(&p), "price with zero value");
    }

    #[test]
    fn test_price_outside_bounds() {
        let msg = "price must be between 1.00 and 99999999.00";

        for bad in [-5.0, 1.0, 100_000_000.0, f64::NAN] {
            let mut p = product();
            p.price = bad;
            assert_eq!(message(&p), msg, "{bad} should be rejected");
        }

        let mut p = product();
        p.price = 99_999_999.0;
        assert!(validate_product(&p).is_ok());
    }

    #[test]
    fn test_field_lengths_outside_bounds() {
        let mut p = product();
        p.name = "ab".into();
        assert_eq!(message(&p), "name must be between 3 and 50");

        let mut p = product();
        p.brand = "x".repeat(80);
        assert_eq!(message(&p), "brand must be between 3 and 50");

        let mut p = product();
        p.size = "s".repeat(40);
        assert_eq!(message(&p), "size must be between 1 and 15");

        let mut p = product();
        p.size = String::new();
        assert_eq!(message(&p), "size must be between 1 and 15");
    }

    #[test]
    fn test_zero_price_keeps_its_own_message() {
        let mut p = product();
        p.brand = "x".repeat(80);
        p.price = 0.0;
        assert_eq!(message(&p), "price with zero value");
    }

    #[test]
    fn test_other_images_report_first_bad_url() {
        let mut p = product();
        p.other_images = vec![
            "images.example.com/ok.jpg".into(),
            "/relative.jpg".into(),
            ":bad".into(),
        ];
        assert_eq!(message(&p), "url => /relative.jpg with wrong format");
    }

    #[test]
    fn test_rules_checked_in_order() {
        let mut p = product();
        p.sku = "BAD".into();
        p.name = String::new();
        p.price = 0.0;
        assert_eq!(message(&p), "invalid sku format (right format: FAL-XXXXXXX)");
    }

    #[test]
    fn test_url_shape() {
        assert!(is_valid_url("https://www.example.com/a.png"));
        assert!(is_valid_url("http://user@example.com"));
        assert!(is_valid_url("example.com"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("/path/only"));
    }
}
