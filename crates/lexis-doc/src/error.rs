//! Error types for lexis-doc

use crate::ValueKind;

/// Result type for lexis-doc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing or reading a settings document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text is not valid JSON
    #[error("Failed to parse settings document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The text is valid JSON but its root is not an object
    #[error("Settings document root must be an object, found {found}")]
    NotAnObject { found: ValueKind },

    /// A required key is absent
    #[error("Missing key: {key}")]
    MissingKey { key: String },

    /// The stored value has a different shape than requested
    #[error("Type mismatch for '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl Error {
    pub(crate) fn mismatch(key: &str, expected: ValueKind, found: ValueKind) -> Self {
        Self::TypeMismatch {
            key: key.to_string(),
            expected,
            found,
        }
    }
}
