use serde::{Deserialize, Serialize};

/// Name used when a catalog record carries no usable name field.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// Where a product should be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageCategory {
    Fridge,
    Cupboard,
    Freezer,
}

impl std::fmt::Display for StorageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageCategory::Fridge => write!(f, "fridge"),
            StorageCategory::Cupboard => write!(f, "cupboard"),
            StorageCategory::Freezer => write!(f, "freezer"),
        }
    }
}

/// Whether a printed date is a safety deadline or a quality guideline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateType {
    BestBefore,
    UseBy,
}

impl std::fmt::Display for DateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateType::BestBefore => write!(f, "best_before"),
            DateType::UseBy => write!(f, "use_by"),
        }
    }
}

/// The result of classifying one catalog record.
///
/// Built once per barcode lookup and never mutated afterwards. Serializes
/// with the camel-cased field names the app's screens consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedProduct {
    /// Never empty; [`UNKNOWN_PRODUCT_NAME`] when nothing usable was found.
    pub name: String,
    pub storage_category: StorageCategory,
    pub date_type: DateType,
    pub is_frozen: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Raw `brands` field; empty string when the catalog has none.
    #[serde(default)]
    pub brand: String,
}
