use larder_core::UNKNOWN_PRODUCT_NAME;

use crate::types::{text, RawProductRecord};

/// Derives a display name from the brand and name fields.
///
/// The brand is prepended to `product_name` unless the name already mentions
/// it (case-insensitively). Otherwise the first non-empty of `product_name`,
/// `product_name_en` and `generic_name` is used, then
/// [`UNKNOWN_PRODUCT_NAME`].
#[must_use]
pub fn resolve_name(record: &RawProductRecord) -> String {
    let brand = text(record.brands.as_ref());
    let product_name = text(record.product_name.as_ref());

    if let (Some(brand), Some(name)) = (brand, product_name) {
        if !name.to_lowercase().contains(&brand.to_lowercase()) {
            return format!("{brand} {name}");
        }
    }

    product_name
        .or_else(|| text(record.product_name_en.as_ref()))
        .or_else(|| text(record.generic_name.as_ref()))
        .unwrap_or(UNKNOWN_PRODUCT_NAME)
        .to_owned()
}
