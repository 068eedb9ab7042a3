#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Origin of the product catalog, e.g. `https://world.openfoodfacts.org`.
    pub catalog_base_url: String,
    /// Per-request timeout the app imposes on catalog lookups.
    pub catalog_timeout_secs: u64,
    pub catalog_user_agent: String,
    /// Items expiring within this many days are flagged.
    pub expiry_warning_days: i64,
}
