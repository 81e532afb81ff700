//! The aggregate analyzer configuration.

use crate::{PathSetting, Result};
use lexis_doc::Document;
use lexis_fs::{Location, SettingsAnchor};
use lexis_plugin::{
    Capability, InstantiateError, PluginCategory, PluginDescriptor, TypeLoader,
};
use std::sync::Arc;

pub const SYSTEM_DICT_KEY: &str = "systemDict";
pub const USER_DICT_KEY: &str = "userDict";
pub const CHAR_DEF_KEY: &str = "characterDefinition";
/// Alternative spelling of [`CHAR_DEF_KEY`]; the primary key wins when both are set.
pub const CHAR_DEF_FILE_KEY: &str = "characterDefinitionFile";
pub const ALLOW_EMPTY_MORPHEME_KEY: &str = "allowEmptyMorpheme";

/// Ordered plugin descriptors for each category.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct PluginLists {
    pub(crate) input_text: Vec<PluginDescriptor>,
    pub(crate) oov_provider: Vec<PluginDescriptor>,
    pub(crate) path_rewrite: Vec<PluginDescriptor>,
    pub(crate) edit_connection_cost: Vec<PluginDescriptor>,
}

impl PluginLists {
    pub(crate) fn get(&self, category: PluginCategory) -> &Vec<PluginDescriptor> {
        match category {
            PluginCategory::InputText => &self.input_text,
            PluginCategory::OovProvider => &self.oov_provider,
            PluginCategory::PathRewrite => &self.path_rewrite,
            PluginCategory::EditConnectionCost => &self.edit_connection_cost,
        }
    }

    pub(crate) fn get_mut(&mut self, category: PluginCategory) -> &mut Vec<PluginDescriptor> {
        match category {
            PluginCategory::InputText => &mut self.input_text,
            PluginCategory::OovProvider => &mut self.oov_provider,
            PluginCategory::PathRewrite => &mut self.path_rewrite,
            PluginCategory::EditConnectionCost => &mut self.edit_connection_cost,
        }
    }

    fn is_empty(&self) -> bool {
        PluginCategory::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}

/// Settings for one analyzer instance.
///
/// A `Config` is built once from a document and an anchor (or
/// [`Config::empty`]) and then only combined with other layers through
/// [`Config::merge`], which returns a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) system_dictionary: Option<PathSetting>,
    pub(crate) user_dictionaries: Vec<PathSetting>,
    pub(crate) character_definition: Option<PathSetting>,
    pub(crate) allow_empty_morpheme: Option<bool>,
    pub(crate) plugins: PluginLists,
    pub(crate) anchor: Arc<SettingsAnchor>,
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    /// A configuration with nothing set and an anchor that resolves nothing.
    pub fn empty() -> Self {
        Self {
            system_dictionary: None,
            user_dictionaries: Vec::new(),
            character_definition: None,
            allow_empty_morpheme: None,
            plugins: PluginLists::default(),
            anchor: Arc::new(SettingsAnchor::None),
        }
    }

    /// Build a configuration from a parsed document.
    ///
    /// Unrecognized keys are ignored and absent keys leave their field unset.
    /// Path values are stored raw and bound to `anchor`. A malformed plugin
    /// entry fails the whole construction.
    pub fn from_document(doc: &Document, anchor: impl Into<Arc<SettingsAnchor>>) -> Result<Self> {
        let anchor = anchor.into();
        let bind = |raw: &str| PathSetting::new(raw, Arc::clone(&anchor));

        let system_dictionary = doc.opt_string(SYSTEM_DICT_KEY)?.map(bind);
        let user_dictionaries = doc
            .opt_string_list(USER_DICT_KEY)?
            .iter()
            .map(|raw| bind(raw))
            .collect();
        let character_definition = match doc.opt_string(CHAR_DEF_KEY)? {
            Some(raw) => Some(raw),
            None => doc.opt_string(CHAR_DEF_FILE_KEY)?,
        }
        .map(bind);
        let allow_empty_morpheme = doc.opt_bool(ALLOW_EMPTY_MORPHEME_KEY)?;

        let mut plugins = PluginLists::default();
        for category in PluginCategory::ALL {
            *plugins.get_mut(category) = PluginDescriptor::list_from(doc, category.key())?;
        }

        tracing::trace!(
            %anchor,
            keys = doc.len(),
            "Built configuration layer from document"
        );

        Ok(Self {
            system_dictionary,
            user_dictionaries,
            character_definition,
            allow_empty_morpheme,
            plugins,
            anchor,
        })
    }

    /// The anchor new paths of this configuration are bound to.
    pub fn anchor(&self) -> &SettingsAnchor {
        &self.anchor
    }

    /// Resolve an arbitrary resource name through this configuration's anchor.
    pub fn resolve(&self, name: &str) -> lexis_fs::Result<Location> {
        self.anchor.resolve(name)
    }

    pub fn system_dictionary(&self) -> Option<&PathSetting> {
        self.system_dictionary.as_ref()
    }

    pub fn user_dictionaries(&self) -> &[PathSetting] {
        &self.user_dictionaries
    }

    pub fn character_definition(&self) -> Option<&PathSetting> {
        self.character_definition.as_ref()
    }

    pub fn allow_empty_morpheme(&self) -> Option<bool> {
        self.allow_empty_morpheme
    }

    /// Descriptors of one category, in execution order.
    pub fn plugins(&self, category: PluginCategory) -> &[PluginDescriptor] {
        self.plugins.get(category)
    }

    pub fn input_text_plugins(&self) -> &[PluginDescriptor] {
        self.plugins(PluginCategory::InputText)
    }

    pub fn oov_provider_plugins(&self) -> &[PluginDescriptor] {
        self.plugins(PluginCategory::OovProvider)
    }

    pub fn path_rewrite_plugins(&self) -> &[PluginDescriptor] {
        self.plugins(PluginCategory::PathRewrite)
    }

    pub fn edit_connection_cost_plugins(&self) -> &[PluginDescriptor] {
        self.plugins(PluginCategory::EditConnectionCost)
    }

    /// Whether no field is set. The anchor is not considered.
    pub fn is_empty(&self) -> bool {
        self.system_dictionary.is_none()
            && self.user_dictionaries.is_empty()
            && self.character_definition.is_none()
            && self.allow_empty_morpheme.is_none()
            && self.plugins.is_empty()
    }

    /// Instantiate every plugin of capability `C`'s category, in order.
    ///
    /// Stops at the first descriptor that cannot be instantiated.
    pub fn instantiate_plugins<C: Capability + ?Sized>(
        &self,
        loader: &dyn TypeLoader,
    ) -> std::result::Result<Vec<Box<C>>, InstantiateError> {
        self.plugins(C::CATEGORY)
            .iter()
            .map(|descriptor| descriptor.instantiate::<C>(loader))
            .collect()
    }

    fn bind(&self, raw: impl Into<String>) -> PathSetting {
        PathSetting::new(raw, Arc::clone(&self.anchor))
    }

    // Programmatic setup. Paths bind to this configuration's own anchor.

    pub fn with_system_dictionary(mut self, raw: impl Into<String>) -> Self {
        self.system_dictionary = Some(self.bind(raw));
        self
    }

    /// Append a user dictionary after the existing ones.
    pub fn with_user_dictionary(mut self, raw: impl Into<String>) -> Self {
        let setting = self.bind(raw);
        self.user_dictionaries.push(setting);
        self
    }

    pub fn with_character_definition(mut self, raw: impl Into<String>) -> Self {
        self.character_definition = Some(self.bind(raw));
        self
    }

    pub fn with_allow_empty_morpheme(mut self, allow: bool) -> Self {
        self.allow_empty_morpheme = Some(allow);
        self
    }

    /// Append a plugin after the existing ones of its category.
    pub fn with_plugin(mut self, category: PluginCategory, descriptor: PluginDescriptor) -> Self {
        self.plugins.get_mut(category).push(descriptor);
        self
    }

    /// Append a plugin with no properties beyond its class name.
    pub fn with_plugin_class(self, category: PluginCategory, class_name: impl Into<String>) -> Self {
        self.with_plugin(category, PluginDescriptor::from_class(class_name))
    }
}
