use super::{display_config::DisplayConfig, storage_config::StorageConfig};

pub struct AppConfig {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            display: DisplayConfig::from_env(),
        }
    }
}
