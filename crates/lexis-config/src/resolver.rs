//! Configuration resolution over a fixed hierarchy of layers
//!
//! The `ConfigResolver` loads settings from up to four sources and merges
//! each one over the previous result, so later sources override earlier ones.

use crate::{Config, Error, MergeMode, Result, builtin_bundle};
use lexis_fs::{Bundle, DEFAULT_SETTINGS_FILE, SettingsAnchor};
use std::path::{Path, PathBuf};

/// Directory name of the user-global settings, under the platform config dir.
pub const GLOBAL_CONFIG_DIR_NAME: &str = "lexis";

/// Resolves the effective configuration from layered sources
///
/// Layers, in order:
/// 1. Bundle defaults (`lexis.json` in the resolver's bundle)
/// 2. User-global settings (`<config_dir>/lexis/lexis.json`)
/// 3. An explicit settings file
/// 4. Inline JSON
///
/// Layers 2 and 4 are optional and skipped when absent. A settings file
/// that was asked for but does not exist is an error.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    bundle: Bundle,
    mode: MergeMode,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform directory from `dirs::config_dir()` is used.
    global_config_dir_override: Option<PathBuf>,

    settings_file: Option<PathBuf>,
    inline: Option<String>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Create a resolver over the builtin bundle with [`MergeMode::Replace`].
    ///
    /// Uses the platform global config directory:
    /// - Linux: `~/.config/lexis/`
    /// - macOS: `~/Library/Application Support/lexis/`
    /// - Windows: `%APPDATA%\lexis\`
    pub fn new() -> Self {
        Self {
            bundle: builtin_bundle(),
            mode: MergeMode::default(),
            global_config_dir_override: None,
            settings_file: None,
            inline: None,
        }
    }

    /// Use a custom global config directory instead of the platform one.
    pub fn with_global_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir_override = Some(dir.into());
        self
    }

    /// Take defaults from `bundle` instead of the builtin one.
    pub fn with_bundle(mut self, bundle: Bundle) -> Self {
        self.bundle = bundle;
        self
    }

    pub fn with_mode(mut self, mode: MergeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_file = Some(path.into());
        self
    }

    /// Inline settings, resolved against the working directory and then the bundle.
    pub fn with_inline_settings(mut self, json: impl Into<String>) -> Self {
        self.inline = Some(json.into());
        self
    }

    pub fn mode(&self) -> MergeMode {
        self.mode
    }

    /// Determine the global config directory path.
    ///
    /// Returns the override if set, otherwise the platform config directory.
    pub fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join(GLOBAL_CONFIG_DIR_NAME))
    }

    /// Anchor for a layer read from `dir`: the directory first, then the bundle.
    fn file_anchor(&self, dir: &Path) -> SettingsAnchor {
        SettingsAnchor::filesystem(dir).and_then(SettingsAnchor::bundle(self.bundle.clone()))
    }

    /// Load and merge every present layer.
    ///
    /// Fails on a missing explicit settings file, on unparseable text in any
    /// layer, and on a bundle without its default settings resource.
    pub fn resolve(&self) -> Result<Config> {
        // Layer 1 - Bundle defaults
        tracing::debug!(bundle = self.bundle.name(), "Loading bundle defaults (layer 1)");
        let mut config = Config::from_bundle(&self.bundle)?;

        // Layer 2 - User-global settings
        if let Some(global_dir) = self.global_config_dir() {
            let global_settings_path = global_dir.join(DEFAULT_SETTINGS_FILE);
            if global_settings_path.is_file() {
                tracing::debug!(?global_settings_path, "Loading global settings (layer 2)");
                let global =
                    Config::from_file(&global_settings_path, Some(self.file_anchor(&global_dir)))?;
                config = config.merge(&global, self.mode);
            } else {
                tracing::debug!(
                    ?global_settings_path,
                    "No global settings found (layer 2), skipping"
                );
            }
        }

        // Layer 3 - Explicit settings file
        if let Some(ref settings_path) = self.settings_file {
            if !settings_path.is_file() {
                return Err(Error::SettingsNotFound {
                    path: settings_path.clone(),
                });
            }
            tracing::debug!(?settings_path, "Loading settings file (layer 3)");
            let dir = settings_path.parent().unwrap_or_else(|| Path::new(""));
            let file = Config::from_file(settings_path, Some(self.file_anchor(dir)))?;
            config = config.merge(&file, self.mode);
        }

        // Layer 4 - Inline JSON
        if let Some(ref inline) = self.inline {
            tracing::debug!(len = inline.len(), "Applying inline settings (layer 4)");
            let anchor = SettingsAnchor::current_dir()
                .and_then(SettingsAnchor::bundle(self.bundle.clone()));
            let inline = Config::from_json_str(inline, anchor)?;
            config = config.merge(&inline, self.mode);
        }

        Ok(config)
    }
}
