use larder_core::{DateType, StorageCategory};

use super::*;

#[test]
fn empty_record_classifies_to_defaults() {
    let product = classify_record(&RawProductRecord::default());
    assert_eq!(product.name, "Unknown Product");
    assert_eq!(product.storage_category, StorageCategory::Cupboard);
    assert_eq!(product.date_type, DateType::BestBefore);
    assert!(!product.is_frozen);
    assert!(product.image_url.is_none());
    assert_eq!(product.brand, "");
}

#[test]
fn whole_milk_is_fridge_use_by() {
    let record = RawProductRecord {
        product_name: Some("Organic Whole Milk".into()),
        categories_tags: Some(vec!["en:dairies".into(), "en:milks".into()]),
        storage_conditions: Some("keep refrigerated below 5°C".into()),
        ..RawProductRecord::default()
    };
    let product = classify_record(&record);
    assert_eq!(product.name, "Organic Whole Milk");
    assert_eq!(product.storage_category, StorageCategory::Fridge);
    assert_eq!(product.date_type, DateType::UseBy);
    assert!(!product.is_frozen);
}

#[test]
fn ice_cream_name_makes_it_frozen() {
    let record = RawProductRecord {
        product_name: Some("Vanilla Ice Cream".into()),
        categories_tags: Some(vec!["en:ice-creams".into()]),
        ..RawProductRecord::default()
    };
    let classification = explain_record(&record);
    assert!(classification.product.is_frozen);
    assert_eq!(
        classification.product.storage_category,
        StorageCategory::Freezer
    );
    assert_eq!(classification.storage_rule, "frozen_flag");
    assert_eq!(classification.product.date_type, DateType::BestBefore);
    assert_eq!(classification.date_type_rule, "frozen");
}

#[test]
fn frozen_tag_without_text_sends_product_to_freezer() {
    let record = RawProductRecord {
        product_name: Some("Garden Peas".into()),
        categories_tags: Some(vec!["en:frozen-vegetables".into()]),
        ..RawProductRecord::default()
    };
    let product = classify_record(&record);
    assert!(product.is_frozen);
    assert_eq!(product.storage_category, StorageCategory::Freezer);
}

#[test]
fn brand_and_image_pass_through_unchanged() {
    let record = RawProductRecord {
        brands: Some("Acme, Acme Foods".into()),
        product_name: Some("Beans".into()),
        image_url: Some("https://images.example/beans.jpg".into()),
        ..RawProductRecord::default()
    };
    let product = classify_record(&record);
    assert_eq!(product.name, "Acme, Acme Foods Beans");
    assert_eq!(product.brand, "Acme, Acme Foods");
    assert_eq!(
        product.image_url.as_deref(),
        Some("https://images.example/beans.jpg")
    );
}

#[test]
fn classification_is_deterministic() {
    let record = RawProductRecord {
        product_name: Some("Mature Cheddar".into()),
        brands: Some("Dairy Co".into()),
        categories_tags: Some(vec!["en:cheeses".into()]),
        conservation_conditions: Some("Keep refrigerated".into()),
        expiration_date_info: Some("Use by: see front".into()),
        ..RawProductRecord::default()
    };
    assert_eq!(classify_record(&record), classify_record(&record));
    assert_eq!(explain_record(&record), explain_record(&record));
}

#[test]
fn storage_text_frozen_keyword_always_wins() {
    let record = RawProductRecord {
        storage_conditions: Some("Keep refrigerated or store frozen".into()),
        categories_tags: Some(vec!["en:cheeses".into()]),
        expiration_date_info: Some("use by".into()),
        ..RawProductRecord::default()
    };
    let product = classify_record(&record);
    assert_eq!(product.storage_category, StorageCategory::Freezer);
    assert!(product.is_frozen);
    assert_eq!(product.date_type, DateType::UseBy);
}

#[test]
fn cheese_from_tags_is_fridge_use_by() {
    let record = RawProductRecord {
        product_name: Some("Brie".into()),
        categories_tags: Some(vec!["en:cheeses".into(), "en:soft-cheeses".into()]),
        ..RawProductRecord::default()
    };
    let classification = explain_record(&record);
    assert_eq!(classification.storage_rule, "refrigerated_category");
    assert_eq!(classification.date_type_rule, "fridge_perishable_category");
    assert_eq!(classification.product.date_type, DateType::UseBy);
}
