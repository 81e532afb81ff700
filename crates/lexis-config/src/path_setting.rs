//! Path-valued settings bound to the anchor of their layer.

use lexis_fs::{Location, SettingsAnchor};
use std::fmt;
use std::sync::Arc;

/// A path as written in a settings document, plus the anchor that resolves it.
///
/// The raw string is kept verbatim; nothing is resolved until
/// [`PathSetting::resolve`] is called. The anchor travels with the value
/// through merges, so a path always resolves the way the layer that wrote it
/// intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSetting {
    raw: String,
    anchor: Arc<SettingsAnchor>,
}

impl PathSetting {
    pub fn new(raw: impl Into<String>, anchor: Arc<SettingsAnchor>) -> Self {
        Self {
            raw: raw.into(),
            anchor,
        }
    }

    /// The path exactly as it appeared in the document.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn anchor(&self) -> &SettingsAnchor {
        &self.anchor
    }

    /// Resolve through the bound anchor.
    pub fn resolve(&self) -> lexis_fs::Result<Location> {
        self.anchor.resolve(&self.raw)
    }

    pub fn exists(&self) -> bool {
        self.anchor.exists(&self.raw)
    }

    /// Resolve and read the resource as text.
    pub fn read_to_string(&self) -> lexis_fs::Result<String> {
        self.resolve()?.read_to_string()
    }
}

impl fmt::Display for PathSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.raw, self.anchor)
    }
}
