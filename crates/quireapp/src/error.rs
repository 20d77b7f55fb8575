use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum QuireError {
    /// A required attribute is missing; `field` names it so a form can point at it.
    #[error("{entity} requires a {field}")]
    Validation { entity: &'static str, field: String },

    /// A value the store cannot persist, such as a non-finite number.
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("{0}")]
    IdentityConflict(String),

    #[error("slug {slug} already exists in {existing}")]
    Uniqueness { slug: String, existing: Uuid },

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Store error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification of a [`QuireError`], for transports that need to pick
/// a status code (4xx for caller mistakes, 404 for misses, 5xx for storage).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    IdentityConflict,
    Uniqueness,
    NotFound,
    Storage,
}

impl QuireError {
    pub fn validation(entity: &'static str, field: impl Into<String>) -> Self {
        QuireError::Validation {
            entity,
            field: field.into(),
        }
    }

    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        QuireError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            QuireError::Validation { .. } | QuireError::InvalidValue { .. } => {
                ErrorKind::Validation
            }
            QuireError::IdentityConflict(_) => ErrorKind::IdentityConflict,
            QuireError::Uniqueness { .. } => ErrorKind::Uniqueness,
            QuireError::NotFound { .. } => ErrorKind::NotFound,
            QuireError::Storage(_) | QuireError::Io(_) | QuireError::Serialization(_) => {
                ErrorKind::Storage
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, QuireError>;
