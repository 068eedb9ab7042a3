//! Catalog command handlers: live barcode lookup and offline classification.

use std::path::Path;

use anyhow::Context;
use larder_catalog::{classify_record, explain_record, CatalogClient, RawProductRecord};

/// Look up `barcode` in the configured catalog and print the classified
/// product as JSON.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the lookup fails. A
/// barcode the catalog does not know gets a hint to add the item by hand.
pub(crate) async fn run_lookup(config: &larder_core::AppConfig, barcode: &str) -> anyhow::Result<()> {
    let client = CatalogClient::with_base_url(
        &config.catalog_base_url,
        config.catalog_timeout_secs,
        &config.catalog_user_agent,
    )?;

    match client.classify_product(barcode).await {
        Ok(product) => {
            println!("{}", serde_json::to_string_pretty(&product)?);
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            tracing::warn!(barcode, error = %err, "product not in catalog");
            anyhow::bail!("{err}; add the item manually instead")
        }
        Err(err) => Err(err.into()),
    }
}

/// Classify a catalog payload saved on disk and print the result as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds
/// an envelope without a product.
pub(crate) fn run_classify(path: &Path, explain: bool) -> anyhow::Result<()> {
    let record = read_record(path)?;
    let output = if explain {
        serde_json::to_string_pretty(&explain_record(&record))?
    } else {
        serde_json::to_string_pretty(&classify_record(&record))?
    };
    println!("{output}");
    Ok(())
}

fn read_record(path: &Path) -> anyhow::Result<RawProductRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    RawProductRecord::from_payload(payload)
        .with_context(|| format!("{} holds a malformed product record", path.display()))?
        .ok_or_else(|| anyhow::anyhow!("{} has no product", path.display()))
}
