//! Product lookup and metadata inference against the open food catalog.
//!
//! [`CatalogClient`] fetches a raw record by barcode; [`classify_record`]
//! turns that loosely populated record into a [`larder_core::ClassifiedProduct`].

pub mod classify;
pub mod client;
pub mod error;
pub mod types;

pub use classify::{
    classify_date_type, classify_record, classify_storage, explain_record, is_frozen,
    resolve_name, Classification,
};
pub use client::CatalogClient;
pub use error::CatalogError;
pub use types::RawProductRecord;
