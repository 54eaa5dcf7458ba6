use thiserror::Error;

/// Storage-specific error types for the Handset device registry.
///
/// These errors represent failures in document store operations. Callers at
/// the HTTP boundary treat every variant as a server-side failure.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Store connection or command execution failed
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Entity not found in store
    #[error("Entity not found: {entity_type} with {field}={value}")]
    NotFound {
        entity_type: String,
        field: String,
        value: String,
    },

    /// Stored document could not be mapped to a domain entity
    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Store is not reachable
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Not-found error for a device id.
    pub fn device_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Device".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        }
    }

    /// Whether this error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Specialized result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
