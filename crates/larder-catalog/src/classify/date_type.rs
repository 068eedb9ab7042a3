//! Date-type cascade.
//!
//! "Use by" is reserved for perishables kept in the fridge; everything else
//! gets the less strict "best before".

use larder_core::{DateType, StorageCategory};

use super::patterns::{any_tag_matches, PERISHABLE_CATEGORY};
use super::rules::{decide, Decision, Rule};
use crate::types::{text, RawProductRecord};

/// Date type used when no rule decides.
pub const DEFAULT_DATE_TYPE: DateType = DateType::BestBefore;

#[derive(Debug)]
pub(crate) struct DateEvidence {
    expiration_text: Option<String>,
    storage: StorageCategory,
    is_frozen: bool,
    category_tags: Option<Vec<String>>,
}

impl DateEvidence {
    pub(crate) fn new(record: &RawProductRecord, storage: StorageCategory, is_frozen: bool) -> Self {
        Self {
            expiration_text: text(record.expiration_date_info.as_ref()).map(str::to_lowercase),
            storage,
            is_frozen,
            category_tags: record
                .categories_tags
                .as_ref()
                .map(|tags| tags.iter().map(|t| t.to_lowercase()).collect()),
        }
    }

    fn expiration_mentions(&self, phrase: &str) -> bool {
        self.expiration_text
            .as_deref()
            .is_some_and(|s| s.contains(phrase))
    }
}

fn expiration_says_best_before(e: &DateEvidence) -> bool {
    e.expiration_mentions("best before")
}

fn expiration_says_use_by(e: &DateEvidence) -> bool {
    e.expiration_mentions("use by")
}

fn fridge_perishable_category(e: &DateEvidence) -> bool {
    e.storage == StorageCategory::Fridge
        && e.category_tags
            .as_deref()
            .is_some_and(|tags| any_tag_matches(tags, &PERISHABLE_CATEGORY))
}

fn fridge(e: &DateEvidence) -> bool {
    e.storage == StorageCategory::Fridge
}

fn frozen(e: &DateEvidence) -> bool {
    e.storage == StorageCategory::Freezer || e.is_frozen
}

fn cupboard(e: &DateEvidence) -> bool {
    e.storage == StorageCategory::Cupboard
}

/// Date-type rules in priority order.
pub(crate) const DATE_TYPE_RULES: &[Rule<DateEvidence, DateType>] = &[
    Rule {
        name: "expiration_info_best_before",
        applies: expiration_says_best_before,
        outcome: DateType::BestBefore,
    },
    Rule {
        name: "expiration_info_use_by",
        applies: expiration_says_use_by,
        outcome: DateType::UseBy,
    },
    Rule {
        name: "fridge_perishable_category",
        applies: fridge_perishable_category,
        outcome: DateType::UseBy,
    },
    Rule {
        name: "fridge",
        applies: fridge,
        outcome: DateType::BestBefore,
    },
    Rule {
        name: "frozen",
        applies: frozen,
        outcome: DateType::BestBefore,
    },
    Rule {
        name: "cupboard",
        applies: cupboard,
        outcome: DateType::BestBefore,
    },
];

pub(crate) fn decide_date_type(
    record: &RawProductRecord,
    storage: StorageCategory,
    is_frozen: bool,
) -> Decision<DateType> {
    let evidence = DateEvidence::new(record, storage, is_frozen);
    decide(DATE_TYPE_RULES, &evidence, DEFAULT_DATE_TYPE)
}

/// Decides whether the printed date is a "use by" or "best before" date.
#[must_use]
pub fn classify_date_type(
    record: &RawProductRecord,
    storage: StorageCategory,
    is_frozen: bool,
) -> DateType {
    let decision = decide_date_type(record, storage, is_frozen);
    tracing::debug!(rule = decision.rule, date_type = %decision.value, "date type decided");
    decision.value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_tags(tags: &[&str]) -> RawProductRecord {
        RawProductRecord {
            categories_tags: Some(tags.iter().map(|t| (*t).to_owned()).collect()),
            ..RawProductRecord::default()
        }
    }

    fn with_expiration(text: &str) -> RawProductRecord {
        RawProductRecord {
            expiration_date_info: Some(text.to_owned()),
            ..RawProductRecord::default()
        }
    }

    #[test]
    fn expiration_best_before_wins_over_perishable_fridge() {
        let mut record = with_expiration("Best Before: see lid");
        record.categories_tags = Some(vec!["en:milks".into()]);
        assert_eq!(
            classify_date_type(&record, StorageCategory::Fridge, false),
            DateType::BestBefore
        );
    }

    #[test]
    fn expiration_use_by_applies_to_cupboard_products() {
        let record = with_expiration("USE BY date on base");
        assert_eq!(
            classify_date_type(&record, StorageCategory::Cupboard, false),
            DateType::UseBy
        );
    }

    #[test]
    fn expiration_mentioning_both_prefers_best_before() {
        let record = with_expiration("use by or best before, see pack");
        assert_eq!(
            decide_date_type(&record, StorageCategory::Fridge, false).rule,
            "expiration_info_best_before"
        );
    }

    #[test]
    fn unhelpful_expiration_text_falls_through() {
        let mut record = with_expiration("see lid");
        record.categories_tags = Some(vec!["en:fresh-meats".into()]);
        assert_eq!(
            classify_date_type(&record, StorageCategory::Fridge, false),
            DateType::UseBy
        );
    }

    #[test]
    fn perishable_fridge_products_are_use_by() {
        for tag in ["en:milks", "en:yogurts", "en:fish", "en:deli-meats", "en:cheeses"] {
            assert_eq!(
                classify_date_type(&with_tags(&[tag]), StorageCategory::Fridge, false),
                DateType::UseBy,
                "{tag}"
            );
        }
    }

    #[test]
    fn perishable_tags_outside_fridge_are_best_before() {
        assert_eq!(
            classify_date_type(&with_tags(&["en:cheeses"]), StorageCategory::Cupboard, false),
            DateType::BestBefore
        );
    }

    #[test]
    fn non_perishable_fridge_products_are_best_before() {
        let record = with_tags(&["en:sauces"]);
        let decision = decide_date_type(&record, StorageCategory::Fridge, false);
        assert_eq!(decision.value, DateType::BestBefore);
        assert_eq!(decision.rule, "fridge");
    }

    #[test]
    fn fridge_without_tags_is_best_before() {
        let decision =
            decide_date_type(&RawProductRecord::default(), StorageCategory::Fridge, false);
        assert_eq!(decision.value, DateType::BestBefore);
        assert_eq!(decision.rule, "fridge");
    }

    #[test]
    fn frozen_products_are_best_before() {
        let decision = decide_date_type(&with_tags(&["en:milks"]), StorageCategory::Freezer, true);
        assert_eq!(decision.value, DateType::BestBefore);
        assert_eq!(decision.rule, "frozen");
    }

    #[test]
    fn cupboard_products_are_best_before() {
        let decision =
            decide_date_type(&RawProductRecord::default(), StorageCategory::Cupboard, false);
        assert_eq!(decision.value, DateType::BestBefore);
        assert_eq!(decision.rule, "cupboard");
    }
}
