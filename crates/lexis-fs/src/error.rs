//! Error types for lexis-fs

use std::path::PathBuf;

/// Result type for lexis-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or reading resources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No root of the bundle contains the requested resource
    #[error("Resource '{name}' not found in bundle '{bundle}'")]
    ResourceNotFound { bundle: String, name: String },

    /// The anchor cannot resolve paths at all
    #[error("Cannot resolve '{name}': settings anchor does not support path resolution")]
    ResolutionUnsupported { name: String },

    #[error("I/O error at {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(location: impl ToString, source: std::io::Error) -> Self {
        Self::Io {
            location: location.to_string(),
            source,
        }
    }

    pub fn io_path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::io(path.into().display(), source)
    }
}
