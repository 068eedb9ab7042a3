use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid barcode \"{barcode}\": {reason}")]
    InvalidBarcode { barcode: String, reason: String },

    #[error("invalid catalog base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("catalog lookup for {barcode} failed with HTTP status {status}")]
    LookupFailed { barcode: String, status: u16 },

    #[error("product not found for barcode {barcode}")]
    ProductNotFound { barcode: String },

    #[error("malformed catalog record for barcode {barcode}: {source}")]
    MalformedRecord {
        barcode: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Returns `true` when the catalog has no usable product for the barcode.
    ///
    /// Callers offer manual entry in this case. A malformed record and a 404
    /// from the catalog count as not found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::ProductNotFound { .. }
                | CatalogError::MalformedRecord { .. }
                | CatalogError::LookupFailed { status: 404, .. }
        )
    }
}
