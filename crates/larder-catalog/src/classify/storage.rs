//! Storage category cascade.
//!
//! Explicit `storage_conditions` text outranks `conservation_conditions`
//! text, which outranks the frozen flag, which outranks category tags. A
//! record with none of these is stored in the cupboard.

use larder_core::StorageCategory;

use super::patterns::{
    any_tag_matches, before_opening, has_frozen_keyword, AMBIENT_CONSERVATION_TEXT,
    AMBIENT_STORAGE_TEXT, FRIDGE_TEXT, FROZEN_CATEGORY, REFRIGERATED_CATEGORY,
    SHELF_STABLE_CATEGORY,
};
use super::rules::{decide, Decision, Rule};
use crate::types::{text, RawProductRecord};

/// Category used when no rule decides.
pub const DEFAULT_STORAGE: StorageCategory = StorageCategory::Cupboard;

/// Lowercased inputs for the storage rules, computed once per record.
#[derive(Debug)]
pub(crate) struct StorageEvidence {
    /// Full `storage_conditions` text.
    storage_text: Option<String>,
    /// `storage_conditions` text before any after-opening instructions.
    pre_opening: Option<String>,
    conservation_text: Option<String>,
    category_tags: Option<Vec<String>>,
    is_frozen: bool,
}

impl StorageEvidence {
    pub(crate) fn new(record: &RawProductRecord, is_frozen: bool) -> Self {
        let storage_text = text(record.storage_conditions.as_ref()).map(str::to_lowercase);
        let pre_opening = storage_text.as_deref().map(|s| before_opening(s).to_owned());
        Self {
            storage_text,
            pre_opening,
            conservation_text: text(record.conservation_conditions.as_ref())
                .map(str::to_lowercase),
            category_tags: record
                .categories_tags
                .as_ref()
                .map(|tags| tags.iter().map(|t| t.to_lowercase()).collect()),
            is_frozen,
        }
    }

    /// `true` once storage text exists; conservation text is then ignored.
    fn has_storage_text(&self) -> bool {
        self.storage_text.is_some()
    }

    fn consults_conservation(&self) -> bool {
        !self.has_storage_text()
    }

    fn tags(&self) -> &[String] {
        self.category_tags.as_deref().unwrap_or_default()
    }
}

fn storage_text_frozen(e: &StorageEvidence) -> bool {
    e.storage_text.as_deref().is_some_and(has_frozen_keyword)
}

fn storage_text_fridge_before_opening(e: &StorageEvidence) -> bool {
    e.pre_opening.as_deref().is_some_and(|s| FRIDGE_TEXT.is_match(s))
}

fn storage_text_ambient_before_opening(e: &StorageEvidence) -> bool {
    e.pre_opening
        .as_deref()
        .is_some_and(|s| AMBIENT_STORAGE_TEXT.is_match(s))
}

fn storage_text_fridge_anywhere(e: &StorageEvidence) -> bool {
    e.storage_text.as_deref().is_some_and(|s| FRIDGE_TEXT.is_match(s))
}

fn storage_text_present(e: &StorageEvidence) -> bool {
    e.has_storage_text()
}

fn conservation_text_frozen(e: &StorageEvidence) -> bool {
    e.consults_conservation() && e.conservation_text.as_deref().is_some_and(has_frozen_keyword)
}

fn conservation_text_fridge(e: &StorageEvidence) -> bool {
    e.consults_conservation()
        && e.conservation_text
            .as_deref()
            .is_some_and(|s| FRIDGE_TEXT.is_match(s))
}

fn conservation_text_ambient(e: &StorageEvidence) -> bool {
    e.consults_conservation()
        && e.conservation_text
            .as_deref()
            .is_some_and(|s| AMBIENT_CONSERVATION_TEXT.is_match(s))
}

fn frozen_flag(e: &StorageEvidence) -> bool {
    e.is_frozen
}

fn refrigerated_category(e: &StorageEvidence) -> bool {
    any_tag_matches(e.tags(), &REFRIGERATED_CATEGORY)
}

fn frozen_category(e: &StorageEvidence) -> bool {
    any_tag_matches(e.tags(), &FROZEN_CATEGORY)
}

fn shelf_stable_category(e: &StorageEvidence) -> bool {
    any_tag_matches(e.tags(), &SHELF_STABLE_CATEGORY)
}

/// Storage rules in priority order.
pub(crate) const STORAGE_RULES: &[Rule<StorageEvidence, StorageCategory>] = &[
    Rule {
        name: "storage_text_frozen",
        applies: storage_text_frozen,
        outcome: StorageCategory::Freezer,
    },
    Rule {
        name: "storage_text_fridge_before_opening",
        applies: storage_text_fridge_before_opening,
        outcome: StorageCategory::Fridge,
    },
    Rule {
        name: "storage_text_ambient_before_opening",
        applies: storage_text_ambient_before_opening,
        outcome: StorageCategory::Cupboard,
    },
    Rule {
        name: "storage_text_fridge_anywhere",
        applies: storage_text_fridge_anywhere,
        outcome: StorageCategory::Fridge,
    },
    Rule {
        name: "storage_text_present",
        applies: storage_text_present,
        outcome: StorageCategory::Cupboard,
    },
    Rule {
        name: "conservation_text_frozen",
        applies: conservation_text_frozen,
        outcome: StorageCategory::Freezer,
    },
    Rule {
        name: "conservation_text_fridge",
        applies: conservation_text_fridge,
        outcome: StorageCategory::Fridge,
    },
    Rule {
        name: "conservation_text_ambient",
        applies: conservation_text_ambient,
        outcome: StorageCategory::Cupboard,
    },
    Rule {
        name: "frozen_flag",
        applies: frozen_flag,
        outcome: StorageCategory::Freezer,
    },
    Rule {
        name: "refrigerated_category",
        applies: refrigerated_category,
        outcome: StorageCategory::Fridge,
    },
    Rule {
        name: "frozen_category",
        applies: frozen_category,
        outcome: StorageCategory::Freezer,
    },
    Rule {
        name: "shelf_stable_category",
        applies: shelf_stable_category,
        outcome: StorageCategory::Cupboard,
    },
];

pub(crate) fn decide_storage(record: &RawProductRecord, is_frozen: bool) -> Decision<StorageCategory> {
    let evidence = StorageEvidence::new(record, is_frozen);
    decide(STORAGE_RULES, &evidence, DEFAULT_STORAGE)
}

/// Decides where the product should be stored.
///
/// `is_frozen` is the result of [`super::is_frozen`] for the same record.
#[must_use]
pub fn classify_storage(record: &RawProductRecord, is_frozen: bool) -> StorageCategory {
    let decision = decide_storage(record, is_frozen);
    tracing::debug!(rule = decision.rule, category = %decision.value, "storage category decided");
    decision.value
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
