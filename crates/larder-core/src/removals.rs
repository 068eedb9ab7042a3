//! Inventory log documents and removal-reason counting.
//!
//! Every change to an inventory item writes a log document whose `action` is
//! either `"added"` or the reason the user gave for removing stock. Stored
//! actions are free text, so counting normalizes them first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Log action written when stock is added rather than removed.
pub const ADDED_ACTION: &str = "added";

/// Why stock left the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalReason {
    Expired,
    Consumed,
    Preference,
    Other,
}

impl RemovalReason {
    /// Classifies a stored log action.
    ///
    /// Returns `None` for `"added"` logs, which are not removals. Unknown or
    /// empty actions count as [`RemovalReason::Other`].
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        match action.trim().to_lowercase().as_str() {
            ADDED_ACTION => None,
            "expired" => Some(RemovalReason::Expired),
            "consumed" => Some(RemovalReason::Consumed),
            "preference" => Some(RemovalReason::Preference),
            _ => Some(RemovalReason::Other),
        }
    }
}

impl std::fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemovalReason::Expired => write!(f, "expired"),
            RemovalReason::Consumed => write!(f, "consumed"),
            RemovalReason::Preference => write!(f, "preference"),
            RemovalReason::Other => write!(f, "other"),
        }
    }
}

/// One document from the inventory-log collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLog {
    #[serde(default)]
    pub inventory_item_id: String,
    /// `"added"` or a removal reason, as the user picked it.
    #[serde(default)]
    pub action: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl InventoryLog {
    #[must_use]
    pub fn added(inventory_item_id: &str, quantity: u32, at: DateTime<Utc>) -> Self {
        Self {
            inventory_item_id: inventory_item_id.to_owned(),
            action: ADDED_ACTION.to_string(),
            quantity,
            timestamp: Some(at),
        }
    }

    #[must_use]
    pub fn removed(
        inventory_item_id: &str,
        reason: RemovalReason,
        quantity: u32,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            inventory_item_id: inventory_item_id.to_owned(),
            action: reason.to_string(),
            quantity,
            timestamp: Some(at),
        }
    }
}

/// Removed quantity per reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCounts {
    pub expired: u64,
    pub consumed: u64,
    pub preference: u64,
    pub other: u64,
}

impl ReasonCounts {
    #[must_use]
    pub fn get(&self, reason: RemovalReason) -> u64 {
        match reason {
            RemovalReason::Expired => self.expired,
            RemovalReason::Consumed => self.consumed,
            RemovalReason::Preference => self.preference,
            RemovalReason::Other => self.other,
        }
    }

    fn add(&mut self, reason: RemovalReason, quantity: u64) {
        let slot = match reason {
            RemovalReason::Expired => &mut self.expired,
            RemovalReason::Consumed => &mut self.consumed,
            RemovalReason::Preference => &mut self.preference,
            RemovalReason::Other => &mut self.other,
        };
        *slot += quantity;
    }
}

/// Totals shown on the waste analytics screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalSummary {
    pub total_removed: u64,
    pub reasons: ReasonCounts,
}

impl RemovalSummary {
    /// Sums removed quantities by reason, skipping `"added"` logs.
    #[must_use]
    pub fn from_logs(logs: &[InventoryLog]) -> Self {
        let mut summary = Self::default();
        for log in logs {
            let Some(reason) = RemovalReason::from_action(&log.action) else {
                continue;
            };
            let quantity = u64::from(log.quantity);
            summary.total_removed += quantity;
            summary.reasons.add(reason, quantity);
        }
        summary
    }
}
