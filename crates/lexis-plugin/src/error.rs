//! Error types for lexis-plugin

/// Result type for descriptor extraction
pub type Result<T> = std::result::Result<T, Error>;

/// Structural errors raised while extracting descriptors from a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A plugin list element is not an object with a string `class`
    #[error("Malformed plugin entry {key}[{index}]: {reason}")]
    MalformedPluginEntry {
        key: String,
        index: usize,
        reason: String,
    },

    #[error(transparent)]
    Doc(#[from] lexis_doc::Error),
}

/// Errors raised by plugin code itself
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// A property has an unusable value
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// A property could not be read from the document
    #[error(transparent)]
    Doc(#[from] lexis_doc::Error),

    /// A connection cost index lies outside the matrix
    #[error("Connection ({left}, {right}) is outside the {left_size}x{right_size} matrix")]
    ConnectionOutOfRange {
        left: usize,
        right: usize,
        left_size: usize,
        right_size: usize,
    },

    /// The plugin type cannot be constructed
    #[error("{0}")]
    Unconstructible(String),
}

impl PluginError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Why a resolved type could not become a usable plugin
#[derive(Debug, thiserror::Error)]
pub enum InstantiationFailure {
    #[error("construction failed: {0}")]
    Construct(#[source] PluginError),

    #[error("configuration rejected: {0}")]
    Configure(#[source] PluginError),

    #[error("type {type_name} does not provide {capability} (provides: {provided})")]
    MissingCapability {
        capability: &'static str,
        type_name: &'static str,
        provided: String,
    },
}

/// Which step of instantiation failed
#[derive(Debug, thiserror::Error)]
pub enum InstantiateErrorKind {
    /// The type loader knows no type under the class name
    #[error("class not found")]
    ClassNotFound,

    #[error(transparent)]
    InstantiationFailure(#[from] InstantiationFailure),
}

/// Failure of [`crate::PluginDescriptor::instantiate`].
///
/// Every failing step is reported through this one type; [`InstantiateError::kind`]
/// tells them apart.
#[derive(Debug, thiserror::Error)]
#[error("Failed to instantiate plugin '{class_name}': {kind}")]
pub struct InstantiateError {
    pub class_name: String,
    #[source]
    pub kind: InstantiateErrorKind,
}

impl InstantiateError {
    pub fn kind(&self) -> &InstantiateErrorKind {
        &self.kind
    }

    pub fn is_class_not_found(&self) -> bool {
        matches!(self.kind, InstantiateErrorKind::ClassNotFound)
    }
}
