//! Inventory command handlers over exported store documents.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use larder_core::{flag_expiring, InventoryItem, InventoryLog, RemovalSummary};
use serde::de::DeserializeOwned;

/// Print items expiring within `days` of `today`, soonest first.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or `days` is
/// negative.
pub(crate) fn run_expiring(path: &Path, today: NaiveDate, days: i64) -> anyhow::Result<()> {
    if days < 0 {
        anyhow::bail!("--days must not be negative (got {days})");
    }

    let items: Vec<InventoryItem> = read_documents(path)?;
    let flagged = flag_expiring(&items, today, days);
    tracing::info!(
        items = items.len(),
        flagged = flagged.len(),
        days,
        "checked inventory for expiring items"
    );

    if flagged.is_empty() {
        println!("Nothing expires within {days} days of {today}.");
        return Ok(());
    }

    for entry in &flagged {
        println!("{}", describe_flagged(&entry.item, entry.days_until_expiry));
    }
    Ok(())
}

/// Print removed quantities by reason as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub(crate) fn run_waste(path: &Path) -> anyhow::Result<()> {
    let logs: Vec<InventoryLog> = read_documents(path)?;
    let summary = RemovalSummary::from_logs(&logs);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// One line per flagged item, e.g. `"Milk x2 (use_by) expires in 3 days"`.
fn describe_flagged(item: &InventoryItem, days_until_expiry: i64) -> String {
    let when = match days_until_expiry {
        d if d < -1 => format!("expired {} days ago", -d),
        -1 => "expired yesterday".to_string(),
        0 => "expires today".to_string(),
        1 => "expires tomorrow".to_string(),
        d => format!("expires in {d} days"),
    };
    format!(
        "{} x{} ({}) {}",
        item.name, item.quantity, item.date_type, when
    )
}

fn read_documents<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse documents in {}", path.display()))
}
