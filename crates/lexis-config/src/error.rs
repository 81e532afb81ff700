//! Error types for lexis-config

use std::path::PathBuf;

/// Result type for lexis-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, resolving or instantiating settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An explicitly requested settings file does not exist
    #[error("Settings file not found at {path}")]
    SettingsNotFound { path: PathBuf },

    /// Malformed document text or a value of the wrong shape
    #[error(transparent)]
    Doc(#[from] lexis_doc::Error),

    /// Malformed plugin list entry
    #[error(transparent)]
    Plugin(#[from] lexis_plugin::Error),

    /// Resource resolution or read failure
    #[error(transparent)]
    Fs(#[from] lexis_fs::Error),

    /// A plugin descriptor could not be instantiated
    #[error(transparent)]
    Instantiate(#[from] lexis_plugin::InstantiateError),
}
