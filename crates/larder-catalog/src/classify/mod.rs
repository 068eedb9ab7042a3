//! Classification of raw catalog records.
//!
//! Name and frozen status are derived first; the storage cascade consumes the
//! frozen flag, and the date-type cascade consumes the storage category.
//! Classification is pure and total: every absent field has a default.

mod date_type;
mod frozen;
mod name;
mod patterns;
pub mod rules;
mod storage;

use larder_core::ClassifiedProduct;
use serde::Serialize;

use crate::types::RawProductRecord;

pub use date_type::{classify_date_type, DEFAULT_DATE_TYPE};
pub use frozen::is_frozen;
pub use name::resolve_name;
pub use storage::{classify_storage, DEFAULT_STORAGE};

/// A classified product together with the rules that decided it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub product: ClassifiedProduct,
    pub storage_rule: &'static str,
    pub date_type_rule: &'static str,
}

/// Classifies a record and reports which rule decided each category.
#[must_use]
pub fn explain_record(record: &RawProductRecord) -> Classification {
    let name = resolve_name(record);
    let frozen = is_frozen(record);
    let storage = storage::decide_storage(record, frozen);
    let date_type = date_type::decide_date_type(record, storage.value, frozen);

    tracing::debug!(
        name = %name,
        is_frozen = frozen,
        storage_rule = storage.rule,
        storage_category = %storage.value,
        date_type_rule = date_type.rule,
        date_type = %date_type.value,
        "classified catalog record"
    );

    Classification {
        product: ClassifiedProduct {
            name,
            storage_category: storage.value,
            date_type: date_type.value,
            is_frozen: frozen,
            image_url: record.image_url.clone(),
            brand: record.brands.clone().unwrap_or_default(),
        },
        storage_rule: storage.rule,
        date_type_rule: date_type.rule,
    }
}

/// Classifies a raw catalog record into the facts the app stores.
#[must_use]
pub fn classify_record(record: &RawProductRecord) -> ClassifiedProduct {
    explain_record(record).product
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
