//! Catalog response types for the `GET /api/v3/product/{barcode}.json` endpoint.
//!
//! ## Observed shape
//!
//! The `product` object is community-maintained and inconsistently populated.
//! Every field may be missing, `null`, or an empty string, and free-text fields
//! come in mixed case and arbitrary languages. Unknown fields are ignored.
//!
//! ### Tags
//! `categories_tags`, `labels_tags` and `states_tags` are JSON arrays of
//! language-prefixed slugs, e.g. `["en:dairies", "en:milks"]`. A tag list that
//! is present but is not an array of strings fails deserialization, which the
//! client reports as a malformed record.
//!
//! ### Not found
//! A lookup for an unknown barcode returns a non-2xx status or a body without
//! a `product` object.

use serde::{Deserialize, Serialize};

/// One product as returned by the catalog. No field is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProductRecord {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_name_en: Option<String>,
    #[serde(default)]
    pub generic_name: Option<String>,
    /// Comma-separated brand names as typed by contributors, e.g. `"Acme"`.
    #[serde(default)]
    pub brands: Option<String>,
    /// Free-text storage instructions, e.g. `"Keep refrigerated below 5°C"`.
    #[serde(default)]
    pub storage_conditions: Option<String>,
    #[serde(default)]
    pub conservation_conditions: Option<String>,
    /// Free text describing the printed date, e.g. `"Use by: see lid"`.
    #[serde(default)]
    pub expiration_date_info: Option<String>,
    #[serde(default)]
    pub categories_tags: Option<Vec<String>>,
    #[serde(default)]
    pub labels_tags: Option<Vec<String>>,
    #[serde(default)]
    pub states_tags: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RawProductRecord {
    /// Parses a saved catalog payload: either the full `{ "product": {...} }`
    /// envelope or a bare product object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the JSON is invalid or the product
    /// fields have unexpected types.
    pub fn from_payload(payload: serde_json::Value) -> Result<Option<Self>, serde_json::Error> {
        match payload {
            serde_json::Value::Object(mut map) if map.contains_key("product") => {
                match map.remove("product") {
                    None | Some(serde_json::Value::Null) => Ok(None),
                    Some(product) => serde_json::from_value(product).map(Some),
                }
            }
            other => serde_json::from_value(other).map(Some),
        }
    }
}

/// Returns the field's text when it is present and non-empty.
pub(crate) fn text(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

/// Returns the tag list, treating an absent list as empty.
pub(crate) fn tags(field: Option<&Vec<String>>) -> &[String] {
    field.map(Vec::as_slice).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_empty_object() {
        let record: RawProductRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, RawProductRecord::default());
    }

    #[test]
    fn tolerates_nulls_and_unknown_fields() {
        let record: RawProductRecord = serde_json::from_value(serde_json::json!({
            "product_name": null,
            "brands": "Acme",
            "categories_tags": null,
            "nutriments": { "energy": 120 },
            "code": "5000112637922"
        }))
        .unwrap();
        assert!(record.product_name.is_none());
        assert_eq!(record.brands.as_deref(), Some("Acme"));
        assert!(record.categories_tags.is_none());
    }

    #[test]
    fn rejects_tag_list_of_wrong_type() {
        let result = serde_json::from_value::<RawProductRecord>(serde_json::json!({
            "categories_tags": 5
        }));
        assert!(result.is_err());
    }

    #[test]
    fn from_payload_unwraps_envelope() {
        let record = RawProductRecord::from_payload(serde_json::json!({
            "code": "123",
            "product": { "product_name": "Beans" }
        }))
        .unwrap()
        .unwrap();
        assert_eq!(record.product_name.as_deref(), Some("Beans"));
    }

    #[test]
    fn from_payload_null_product_is_none() {
        let record =
            RawProductRecord::from_payload(serde_json::json!({ "product": null })).unwrap();
        assert!(record.is_none());
    }

    #[test]
    fn from_payload_accepts_bare_product() {
        let record = RawProductRecord::from_payload(serde_json::json!({
            "generic_name": "Baked beans"
        }))
        .unwrap()
        .unwrap();
        assert_eq!(record.generic_name.as_deref(), Some("Baked beans"));
    }

    #[test]
    fn text_filters_empty_strings() {
        let empty = Some(String::new());
        let full = Some("Beans".to_string());
        assert_eq!(text(empty.as_ref()), None);
        assert_eq!(text(full.as_ref()), Some("Beans"));
        assert_eq!(text(None), None);
    }
}
