//! HTTP client for the catalog's product lookup endpoint.
//!
//! One lookup is one GET. There is no retry, cache, or request dedup: a failed
//! or not-found lookup is reported once and the caller decides what to do.

use std::time::Duration;

use larder_core::config::DEFAULT_CATALOG_BASE_URL;
use larder_core::ClassifiedProduct;
use reqwest::{Client, Url};

use crate::classify::classify_record;
use crate::error::CatalogError;
use crate::types::RawProductRecord;

/// Client for barcode lookups against the product catalog.
///
/// Use [`CatalogClient::new`] for the public catalog or
/// [`CatalogClient::with_base_url`] to point at another origin (e.g. a mock
/// server in tests).
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client for the public catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        Self::with_base_url(DEFAULT_CATALOG_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client for the catalog at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash makes `Url::join` append below the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self { client, base_url })
    }

    /// Looks up `barcode` and classifies the returned record.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_product`]. Classification
    /// itself cannot fail.
    pub async fn classify_product(&self, barcode: &str) -> Result<ClassifiedProduct, CatalogError> {
        let record = self.fetch_product(barcode).await?;
        let product = classify_record(&record);
        tracing::info!(
            barcode = barcode.trim(),
            name = %product.name,
            storage_category = %product.storage_category,
            date_type = %product.date_type,
            "classified product"
        );
        Ok(product)
    }

    /// Fetches the raw catalog record for `barcode`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidBarcode`] if the barcode is empty or not all
    ///   digits; no request is sent.
    /// - [`CatalogError::Http`] on network or TLS failure.
    /// - [`CatalogError::LookupFailed`] on a non-2xx status.
    /// - [`CatalogError::ProductNotFound`] if the body has no `product`.
    /// - [`CatalogError::MalformedRecord`] if the body is not JSON or the
    ///   product has fields of unexpected types.
    pub async fn fetch_product(&self, barcode: &str) -> Result<RawProductRecord, CatalogError> {
        let barcode = validate_barcode(barcode)?;
        let url = self.product_url(barcode)?;
        tracing::debug!(barcode, %url, "looking up product");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(barcode, status = status.as_u16(), "catalog lookup failed");
            return Err(CatalogError::LookupFailed {
                barcode: barcode.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_product_body(barcode, &body)
    }

    /// Builds `{base}/api/v3/product/{barcode}.json`.
    fn product_url(&self, barcode: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(&format!("api/v3/product/{barcode}.json"))
            .map_err(|e| CatalogError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Trims `raw` and checks it is a non-empty run of ASCII digits.
pub(crate) fn validate_barcode(raw: &str) -> Result<&str, CatalogError> {
    let barcode = raw.trim();
    if barcode.is_empty() {
        return Err(CatalogError::InvalidBarcode {
            barcode: raw.to_owned(),
            reason: "barcode is empty".to_string(),
        });
    }
    if !barcode.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::InvalidBarcode {
            barcode: raw.to_owned(),
            reason: "barcode must contain only digits".to_string(),
        });
    }
    Ok(barcode)
}

/// Extracts the `product` object from a lookup response body.
pub(crate) fn parse_product_body(
    barcode: &str,
    body: &str,
) -> Result<RawProductRecord, CatalogError> {
    let malformed = |source| CatalogError::MalformedRecord {
        barcode: barcode.to_owned(),
        source,
    };

    let payload: serde_json::Value = serde_json::from_str(body).map_err(malformed)?;
    let product = match payload {
        serde_json::Value::Object(mut map) => map.remove("product"),
        _ => None,
    };

    match product {
        None | Some(serde_json::Value::Null) => Err(CatalogError::ProductNotFound {
            barcode: barcode.to_owned(),
        }),
        Some(product) => serde_json::from_value(product).map_err(malformed),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
