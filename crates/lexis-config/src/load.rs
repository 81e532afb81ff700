//! Loading configurations from text, files and bundles.

use crate::{Config, Error, MergeMode, Result, builtin_bundle};
use lexis_doc::Document;
use lexis_fs::{Bundle, DEFAULT_SETTINGS_FILE, Location, SettingsAnchor};
use std::path::Path;
use std::sync::Arc;

impl Config {
    /// Parse settings text and bind its paths to `anchor`.
    pub fn from_json_str(text: &str, anchor: impl Into<Arc<SettingsAnchor>>) -> Result<Self> {
        let doc = Document::parse(text)?;
        Self::from_document(&doc, anchor)
    }

    /// Read and parse settings from any resolved location.
    pub fn from_location(
        location: &Location,
        anchor: impl Into<Arc<SettingsAnchor>>,
    ) -> Result<Self> {
        tracing::debug!(%location, "Loading settings");
        let text = lexis_fs::io::read_text(location)?;
        Self::from_json_str(&text, anchor)
    }

    /// Load a settings file from disk.
    ///
    /// Without an explicit anchor, paths resolve next to the file first and
    /// fall back to the builtin bundle.
    pub fn from_file(path: impl AsRef<Path>, anchor: Option<SettingsAnchor>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::SettingsNotFound {
                path: path.to_path_buf(),
            });
        }
        let anchor = anchor.unwrap_or_else(|| {
            let dir = path.parent().unwrap_or_else(|| Path::new(""));
            SettingsAnchor::filesystem(dir).and_then(SettingsAnchor::bundle(builtin_bundle()))
        });
        Self::from_location(&Location::File(path.to_path_buf()), anchor)
    }

    /// Load the resource `name` from `bundle`, anchored to the same bundle.
    pub fn from_bundle_resource(bundle: &Bundle, name: &str) -> Result<Self> {
        let location = Location::Bundle(bundle.get(name)?);
        Self::from_location(&location, SettingsAnchor::bundle(bundle.clone()))
    }

    /// Load the bundle's default settings resource.
    pub fn from_bundle(bundle: &Bundle) -> Result<Self> {
        Self::from_bundle_resource(bundle, DEFAULT_SETTINGS_FILE)
    }

    /// Load the defaults shipped inside the binary.
    pub fn from_builtin() -> Result<Self> {
        Self::from_bundle(&builtin_bundle())
    }

    /// Load the bundle's defaults and merge the resource `name` over them.
    ///
    /// Both layers are anchored to `bundle`.
    pub fn from_bundle_resource_merged(bundle: &Bundle, name: &str, mode: MergeMode) -> Result<Self> {
        let defaults = Self::from_bundle(bundle)?;
        let over = Self::from_bundle_resource(bundle, name)?;
        Ok(defaults.merge(&over, mode))
    }
}
