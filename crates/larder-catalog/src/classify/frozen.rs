use super::patterns::{has_frozen_keyword, FROZEN_TAG};
use crate::types::{tags, text, RawProductRecord};

/// Returns `true` if the record looks like a frozen product.
///
/// Two signals are OR-ed: a frozen keyword in any of the name or storage text
/// fields, or a tag in the category, label or state lists containing
/// `"frozen"`.
#[must_use]
pub fn is_frozen(record: &RawProductRecord) -> bool {
    has_frozen_text(record) || has_frozen_tag(record)
}

fn has_frozen_text(record: &RawProductRecord) -> bool {
    [
        &record.generic_name,
        &record.product_name,
        &record.storage_conditions,
        &record.conservation_conditions,
    ]
    .into_iter()
    .filter_map(|field| text(field.as_ref()))
    .any(|field| has_frozen_keyword(&field.to_lowercase()))
}

fn has_frozen_tag(record: &RawProductRecord) -> bool {
    tags(record.categories_tags.as_ref())
        .iter()
        .chain(tags(record.labels_tags.as_ref()))
        .chain(tags(record.states_tags.as_ref()))
        .any(|tag| tag.contains(FROZEN_TAG))
}
