use crate::domain::errors::RepositoryError;

/// String key-value storage the inventory is persisted into.
///
/// Mirrors browser local storage: reads never fail (a missing or unreadable
/// entry is `None`), writes may fail and must be reported.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}
