use std::env;

pub const DEFAULT_CURRENCY: &str = "MWK";

/// How amounts are shown in the table and dashboard
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub currency: String,
}

impl DisplayConfig {
    /// Load display configuration from environment variables
    ///
    /// Environment variables:
    /// - INVENTORY_CURRENCY: Currency label prefixed to amounts (default: "MWK")
    pub fn from_env() -> Self {
        let currency = env::var("INVENTORY_CURRENCY")
            .ok()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Self { currency }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
