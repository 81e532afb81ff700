//! Capability contracts for each plugin category.
//!
//! The engine only relies on these traits. A registered type declares which
//! of them it provides; instantiating a descriptor for a category checks that
//! the type provides the category's capability.

use crate::{Connection, PluginCategory, PluginError};

/// Marker tying a capability trait object to its category.
pub trait Capability: 'static {
    /// Name used in error reports.
    const NAME: &'static str;

    /// The category whose plugins must provide this capability.
    const CATEGORY: PluginCategory;
}

/// Rewrites input text before analysis.
pub trait InputTextPlugin: Send + Sync {
    fn rewrite(&self, text: &str) -> String;
}

/// A candidate word for a span no dictionary entry covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OovCandidate {
    pub surface: String,
    pub left_id: i16,
    pub right_id: i16,
    pub cost: i16,
    pub pos: Vec<String>,
}

/// Provides out-of-vocabulary candidates for a character span.
pub trait OovProviderPlugin: Send + Sync {
    /// `has_other_words` tells whether dictionary words already start at the span.
    fn provide_oov(&self, span: &str, has_other_words: bool) -> Vec<OovCandidate>;
}

/// Rewrites the best path (as token surfaces) after analysis.
pub trait PathRewritePlugin: Send + Sync {
    fn rewrite(&self, path: Vec<String>) -> Vec<String>;
}

/// Edits the connection cost matrix once, when the grammar is loaded.
pub trait EditConnectionCostPlugin: Send + Sync {
    fn edit(&self, connection: &mut Connection) -> Result<(), PluginError>;
}

impl Capability for dyn InputTextPlugin {
    const NAME: &'static str = "InputTextPlugin";
    const CATEGORY: PluginCategory = PluginCategory::InputText;
}

impl Capability for dyn OovProviderPlugin {
    const NAME: &'static str = "OovProviderPlugin";
    const CATEGORY: PluginCategory = PluginCategory::OovProvider;
}

impl Capability for dyn PathRewritePlugin {
    const NAME: &'static str = "PathRewritePlugin";
    const CATEGORY: PluginCategory = PluginCategory::PathRewrite;
}

impl Capability for dyn EditConnectionCostPlugin {
    const NAME: &'static str = "EditConnectionCostPlugin";
    const CATEGORY: PluginCategory = PluginCategory::EditConnectionCost;
}
