//! Shared domain types and configuration for larder.
//!
//! Holds the classified-product vocabulary produced by `larder-catalog`, the
//! inventory and removal-log documents the app persists through its document
//! store, and the pure logic that runs over them.

pub mod app_config;
pub mod config;
pub mod inventory;
pub mod products;
pub mod removals;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use inventory::{
    flag_expiring, FlaggedItem, InventoryItem, NewInventoryItem, Removal, RemovalOutcome,
};
pub use products::{ClassifiedProduct, DateType, StorageCategory, UNKNOWN_PRODUCT_NAME};
pub use removals::{InventoryLog, ReasonCounts, RemovalReason, RemovalSummary};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid quantity {quantity}: {reason}")]
    InvalidQuantity { quantity: u32, reason: String },
}
