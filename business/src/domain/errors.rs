/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Writing to the key-value store failed; the payload carries the
    /// adapter's diagnostic detail.
    #[error("repository.persistence")]
    Persistence(String),
    #[error("repository.serialization")]
    Serialization,
}

impl RepositoryError {
    pub fn persistence(detail: impl Into<String>) -> Self {
        RepositoryError::Persistence(detail.into())
    }
    pub fn serialization() -> Self {
        RepositoryError::Serialization
    }

    /// Adapter detail, if any, for log lines.
    pub fn detail(&self) -> &str {
        match self {
            RepositoryError::Persistence(detail) => detail,
            RepositoryError::Serialization => "failed to serialize inventory state",
        }
    }
}
