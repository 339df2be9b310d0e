use model::core::key::Key;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrmError {
    /// A filter or statement was requested in a shape that can never be valid.
    #[error("ORM configuration error: {0}")]
    Config(String),

    /// A lookup by key matched no row. Raised by callers executing key filters.
    #[error("Object not found by key: {key}")]
    ObjectNotFoundByKey { key: Key },

    #[error("Invalid render settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

impl OrmError {
    pub fn not_found(key: Key) -> Self {
        OrmError::ObjectNotFoundByKey { key }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, OrmError::ObjectNotFoundByKey { .. })
    }
}

pub type Result<T> = std::result::Result<T, OrmError>;
