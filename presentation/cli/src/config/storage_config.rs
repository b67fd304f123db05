use std::env;
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = "inventory.json";

/// Where the inventory is persisted
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
    /// Read the store but keep every write in memory.
    pub dry_run: bool,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - INVENTORY_STORE_PATH: JSON store file (default: "inventory.json")
    pub fn from_env() -> Self {
        let path = env::var("INVENTORY_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));

        Self {
            path,
            dry_run: false,
        }
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(self, path: Option<PathBuf>, dry_run: bool) -> Self {
        Self {
            path: path.unwrap_or(self.path),
            dry_run: self.dry_run || dry_run,
        }
    }
}
