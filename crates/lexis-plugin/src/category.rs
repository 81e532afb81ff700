//! Plugin categories recognized in settings documents.

use std::fmt;

/// A plugin list a settings document can declare.
///
/// Order inside a category's list is the order plugins run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluginCategory {
    InputText,
    OovProvider,
    PathRewrite,
    EditConnectionCost,
}

impl PluginCategory {
    pub const ALL: [PluginCategory; 4] = [
        Self::InputText,
        Self::OovProvider,
        Self::PathRewrite,
        Self::EditConnectionCost,
    ];

    /// Top-level document key holding this category's list.
    pub fn key(&self) -> &'static str {
        match self {
            Self::InputText => "inputTextPlugin",
            Self::OovProvider => "oovProviderPlugin",
            Self::PathRewrite => "pathRewritePlugin",
            Self::EditConnectionCost => "editConnectionCostPlugin",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for PluginCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
