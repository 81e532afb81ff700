//! Inspectable snapshots of a configuration
//!
//! A [`ConfigSummary`] flattens a [`Config`] into plain strings so it can be
//! printed, logged, or handed to external tools as JSON. Paths are shown as
//! written, together with the anchor they are bound to and, when resolution
//! succeeds, the location they point at.
//!
//! # Example
//!
//! ```json
//! {
//!   "anchor": "bundle:lexis",
//!   "systemDictionary": {
//!     "raw": "system_core.dic",
//!     "anchor": "bundle:lexis",
//!     "resolved": null
//!   },
//!   "userDictionaries": [],
//!   "plugins": {
//!     "inputTextPlugin": ["lexis::input::LowercaseInputText"]
//!   }
//! }
//! ```

use crate::{Config, PathSetting};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One path setting, as written and as resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSummary {
    pub raw: String,
    pub anchor: String,
    /// Resolved location, or `None` if the anchor cannot resolve the path
    pub resolved: Option<String>,
}

impl From<&PathSetting> for PathSummary {
    fn from(setting: &PathSetting) -> Self {
        Self {
            raw: setting.raw().to_string(),
            anchor: setting.anchor().to_string(),
            resolved: setting.resolve().ok().map(|location| location.to_string()),
        }
    }
}

/// Serializable view of a [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSummary {
    pub anchor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_dictionary: Option<PathSummary>,

    pub user_dictionaries: Vec<PathSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_definition: Option<PathSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_empty_morpheme: Option<bool>,

    /// Class names per category key, in execution order
    ///
    /// Categories without plugins are left out.
    pub plugins: BTreeMap<String, Vec<String>>,
}

impl ConfigSummary {
    /// Convert the summary to a JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| {
            serde_json::json!({
                "anchor": self.anchor,
                "userDictionaries": [],
                "plugins": {}
            })
        })
    }

    /// Total number of plugin descriptors across categories
    pub fn plugin_count(&self) -> usize {
        self.plugins.values().map(Vec::len).sum()
    }
}

impl Config {
    /// Snapshot this configuration for display.
    ///
    /// Resolves every path once; resolution failures show up as `resolved: None`.
    pub fn summary(&self) -> ConfigSummary {
        let plugins = lexis_plugin::PluginCategory::ALL
            .iter()
            .filter(|category| !self.plugins(**category).is_empty())
            .map(|category| {
                let classes = self
                    .plugins(*category)
                    .iter()
                    .map(|d| d.class_name().to_string())
                    .collect();
                (category.key().to_string(), classes)
            })
            .collect();

        ConfigSummary {
            anchor: self.anchor().to_string(),
            system_dictionary: self.system_dictionary().map(PathSummary::from),
            user_dictionaries: self.user_dictionaries().iter().map(PathSummary::from).collect(),
            character_definition: self.character_definition().map(PathSummary::from),
            allow_empty_morpheme: self.allow_empty_morpheme(),
            plugins,
        }
    }
}
