//! Inventory item documents and the pure logic the app runs over them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::products::{ClassifiedProduct, DateType, StorageCategory};
use crate::removals::{InventoryLog, RemovalReason};
use crate::CoreError;

/// An item document as stored in the inventory-item collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "$id")]
    pub id: String,
    pub inventory_id: String,
    pub name: String,
    pub expiry_date: DateTime<Utc>,
    pub date_type: DateType,
    pub quantity: u32,
    #[serde(default)]
    pub is_frozen: bool,
    #[serde(default)]
    pub is_removed: bool,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_category: Option<StorageCategory>,
}

/// What happens to the item document after a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Some stock is left; the document's quantity becomes `remaining`.
    Decremented { remaining: u32 },
    /// All stock is gone; the document is deleted.
    Deleted,
}

/// A planned removal: the change to apply to the item plus the log to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub outcome: RemovalOutcome,
    pub log: InventoryLog,
}

impl InventoryItem {
    /// Plans the removal of `quantity` units for `reason`.
    ///
    /// Requests above the held quantity are capped, so the log never records
    /// more than was actually removed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidQuantity`] if `quantity` is zero.
    pub fn remove(
        &self,
        quantity: u32,
        reason: RemovalReason,
        at: DateTime<Utc>,
    ) -> Result<Removal, CoreError> {
        if quantity == 0 {
            return Err(CoreError::InvalidQuantity {
                quantity,
                reason: "must remove at least one unit".to_string(),
            });
        }

        let removed = quantity.min(self.quantity);
        let outcome = if quantity < self.quantity {
            RemovalOutcome::Decremented {
                remaining: self.quantity - quantity,
            }
        } else {
            RemovalOutcome::Deleted
        };

        Ok(Removal {
            outcome,
            log: InventoryLog::removed(&self.id, reason, removed, at),
        })
    }

    /// Whole days from `today` until the expiry date; negative once expired.
    #[must_use]
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date.date_naive() - today).num_days()
    }
}

/// A new item document, before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub inventory_id: String,
    pub name: String,
    pub expiry_date: DateTime<Utc>,
    pub date_type: DateType,
    pub quantity: u32,
    pub is_frozen: bool,
    pub is_removed: bool,
    pub barcode: Option<String>,
    pub storage_category: Option<StorageCategory>,
}

impl NewInventoryItem {
    /// Pre-fills an item from a scanned product.
    ///
    /// The expiry date is printed on the pack, so the caller supplies it; it is
    /// stored at midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidQuantity`] if `quantity` is zero.
    pub fn from_classified(
        inventory_id: &str,
        product: &ClassifiedProduct,
        barcode: Option<&str>,
        expiry_date: NaiveDate,
        quantity: u32,
    ) -> Result<Self, CoreError> {
        if quantity == 0 {
            return Err(CoreError::InvalidQuantity {
                quantity,
                reason: "an item needs at least one unit".to_string(),
            });
        }

        Ok(Self {
            inventory_id: inventory_id.to_owned(),
            name: product.name.clone(),
            expiry_date: expiry_date.and_time(chrono::NaiveTime::MIN).and_utc(),
            date_type: product.date_type,
            quantity,
            is_frozen: product.is_frozen,
            is_removed: false,
            barcode: barcode.filter(|b| !b.is_empty()).map(str::to_owned),
            storage_category: Some(product.storage_category),
        })
    }

    /// The log entry written alongside the new document once it has an id.
    #[must_use]
    pub fn added_log(&self, inventory_item_id: &str, at: DateTime<Utc>) -> InventoryLog {
        InventoryLog::added(inventory_item_id, self.quantity, at)
    }
}

/// An item close to, or past, its expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedItem {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub days_until_expiry: i64,
}

/// Returns the items expiring within `days_threshold` days of `today`,
/// including already expired ones, soonest first.
///
/// Removed items are never flagged.
#[must_use]
pub fn flag_expiring(
    items: &[InventoryItem],
    today: NaiveDate,
    days_threshold: i64,
) -> Vec<FlaggedItem> {
    let mut flagged: Vec<FlaggedItem> = items
        .iter()
        .filter(|item| !item.is_removed)
        .filter_map(|item| {
            let days_until_expiry = item.days_until_expiry(today);
            (days_until_expiry <= days_threshold).then(|| FlaggedItem {
                item: item.clone(),
                days_until_expiry,
            })
        })
        .collect();
    flagged.sort_by(|a, b| {
        a.days_until_expiry
            .cmp(&b.days_until_expiry)
            .then_with(|| a.item.name.cmp(&b.item.name))
    });
    flagged
}

#[cfg(test)]
#[path = "inventory_test.rs"]
mod tests;
