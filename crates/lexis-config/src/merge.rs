//! Combining configuration layers.

use crate::Config;
use crate::config::PluginLists;
use lexis_plugin::PluginCategory;
use std::fmt;
use std::sync::Arc;

/// How list-valued fields combine when one layer is merged over another.
///
/// Single-valued fields always take the override's value when it is set,
/// whatever the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MergeMode {
    /// A non-empty override list replaces the base list
    #[default]
    Replace,
    /// The override list is appended after the base list
    Append,
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => f.write_str("replace"),
            Self::Append => f.write_str("append"),
        }
    }
}

fn merge_list<T: Clone>(base: &[T], over: &[T], mode: MergeMode) -> Vec<T> {
    match mode {
        MergeMode::Replace if over.is_empty() => base.to_vec(),
        MergeMode::Replace => over.to_vec(),
        MergeMode::Append => base.iter().chain(over).cloned().collect(),
    }
}

impl Config {
    /// Merge `over` on top of `self`, producing a new configuration.
    ///
    /// Neither input changes. Path settings keep the anchor of the layer
    /// they came from; the result's own anchor is the override's. An empty
    /// override yields a copy of `self`.
    pub fn merge(&self, over: &Config, mode: MergeMode) -> Config {
        if over.is_empty() {
            tracing::debug!(%mode, "Override layer is empty, keeping base");
            return self.clone();
        }

        let mut plugins = PluginLists::default();
        for category in PluginCategory::ALL {
            *plugins.get_mut(category) =
                merge_list(self.plugins.get(category), over.plugins.get(category), mode);
        }

        let merged = Config {
            system_dictionary: over
                .system_dictionary
                .clone()
                .or_else(|| self.system_dictionary.clone()),
            user_dictionaries: merge_list(&self.user_dictionaries, &over.user_dictionaries, mode),
            character_definition: over
                .character_definition
                .clone()
                .or_else(|| self.character_definition.clone()),
            allow_empty_morpheme: over.allow_empty_morpheme.or(self.allow_empty_morpheme),
            plugins,
            anchor: Arc::clone(&over.anchor),
        };

        tracing::debug!(
            %mode,
            base_anchor = %self.anchor,
            override_anchor = %over.anchor,
            user_dictionaries = merged.user_dictionaries.len(),
            "Merged configuration layers"
        );
        merged
    }

    /// Use `base` for everything this configuration leaves unset.
    ///
    /// Same as `base.merge(self, MergeMode::Replace)`.
    pub fn with_fallback(&self, base: &Config) -> Config {
        base.merge(self, MergeMode::Replace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathSetting, SettingsAnchor};
    use lexis_plugin::PluginDescriptor;
    use lexis_plugin::builtins::{
        INHIBIT_CONNECTION, JOIN_NUMERIC, LOWERCASE_INPUT_TEXT, SIMPLE_OOV_PROVIDER,
    };
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn raws(settings: &[PathSetting]) -> Vec<&str> {
        settings.iter().map(PathSetting::raw).collect()
    }

    fn classes(descriptors: &[PluginDescriptor]) -> Vec<&str> {
        descriptors.iter().map(PluginDescriptor::class_name).collect()
    }

    fn base() -> Config {
        Config::from_json_str(
            &format!(
                r#"{{
                    "systemDict": "system.dic",
                    "userDict": ["base.dic"],
                    "characterDefinition": "char.def",
                    "oovProviderPlugin": [{{"class": "{SIMPLE_OOV_PROVIDER}"}}],
                    "pathRewritePlugin": [{{"class": "{JOIN_NUMERIC}"}}]
                }}"#
            ),
            SettingsAnchor::filesystem("/base"),
        )
        .unwrap()
    }

    fn overlay() -> Config {
        Config::from_json_str(
            &format!(
                r#"{{
                    "userDict": ["a.dic", "b.dic"],
                    "allowEmptyMorpheme": true,
                    "oovProviderPlugin": [{{"class": "{SIMPLE_OOV_PROVIDER}", "cost": 12000}}]
                }}"#
            ),
            SettingsAnchor::filesystem("/overlay"),
        )
        .unwrap()
    }

    #[test]
    fn test_merge_replace() {
        let merged = base().merge(&overlay(), MergeMode::Replace);

        assert_eq!(merged.system_dictionary().unwrap().raw(), "system.dic");
        assert_eq!(raws(merged.user_dictionaries()), vec!["a.dic", "b.dic"]);
        assert_eq!(merged.allow_empty_morpheme(), Some(true));
        assert_eq!(merged.oov_provider_plugins().len(), 1);
        assert_eq!(
            merged.oov_provider_plugins()[0]
                .properties()
                .get_int("cost")
                .unwrap(),
            12000
        );
        // Empty override list keeps the base list
        assert_eq!(classes(merged.path_rewrite_plugins()), vec![JOIN_NUMERIC]);
    }

    #[test]
    fn test_merge_append() {
        let merged = base().merge(&overlay(), MergeMode::Append);

        assert_eq!(
            raws(merged.user_dictionaries()),
            vec!["base.dic", "a.dic", "b.dic"]
        );
        assert_eq!(merged.oov_provider_plugins().len(), 2);
        assert!(
            merged.oov_provider_plugins()[0]
                .properties()
                .opt_int("cost")
                .unwrap()
                .is_none()
        );
        assert_eq!(classes(merged.path_rewrite_plugins()), vec![JOIN_NUMERIC]);
    }

    #[test]
    fn test_paths_keep_their_layer_anchor() {
        let merged = base().merge(&overlay(), MergeMode::Append);

        assert_eq!(merged.anchor(), &SettingsAnchor::filesystem("/overlay"));
        let system = merged.system_dictionary().unwrap().resolve().unwrap();
        assert_eq!(system.as_path().unwrap(), std::path::Path::new("/base/system.dic"));
        let first_user = merged.user_dictionaries()[0].resolve().unwrap();
        assert_eq!(first_user.as_path().unwrap(), std::path::Path::new("/base/base.dic"));
        let last_user = merged.user_dictionaries()[2].resolve().unwrap();
        assert_eq!(last_user.as_path().unwrap(), std::path::Path::new("/overlay/b.dic"));
    }

    #[rstest]
    #[case(MergeMode::Replace)]
    #[case(MergeMode::Append)]
    fn test_merge_with_empty_is_identity(#[case] mode: MergeMode) {
        let base = base();
        assert_eq!(base.merge(&Config::empty(), mode), base);
    }

    #[rstest]
    #[case(MergeMode::Replace)]
    #[case(MergeMode::Append)]
    fn test_merge_over_empty_takes_override(#[case] mode: MergeMode) {
        let merged = Config::empty().merge(&overlay(), mode);
        assert_eq!(merged, overlay());
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let (b, o) = (base(), overlay());
        let _ = b.merge(&o, MergeMode::Append);
        assert_eq!(b, base());
        assert_eq!(o, overlay());
    }

    #[test]
    fn test_with_fallback_is_swapped_replace() {
        let (b, o) = (base(), overlay());
        assert_eq!(o.with_fallback(&b), b.merge(&o, MergeMode::Replace));
    }

    #[test]
    fn test_scalars_ignore_mode() {
        let over = Config::empty()
            .with_system_dictionary("override.dic")
            .with_plugin_class(PluginCategory::EditConnectionCost, INHIBIT_CONNECTION);
        for mode in [MergeMode::Replace, MergeMode::Append] {
            let merged = base().merge(&over, mode);
            assert_eq!(merged.system_dictionary().unwrap().raw(), "override.dic");
            assert_eq!(merged.character_definition().unwrap().raw(), "char.def");
        }
    }

    #[test]
    fn test_default_mode_is_replace() {
        assert_eq!(MergeMode::default(), MergeMode::Replace);
        assert_eq!(MergeMode::Append.to_string(), "append");
    }

    fn config_strategy() -> impl Strategy<Value = Config> {
        (
            proptest::option::of("[a-z]{1,8}\\.dic"),
            proptest::collection::vec("[a-z]{1,8}\\.dic", 0..4),
            proptest::option::of(any::<bool>()),
            proptest::collection::vec(
                prop_oneof![Just(LOWERCASE_INPUT_TEXT), Just(JOIN_NUMERIC)],
                0..3,
            ),
        )
            .prop_map(|(system, users, allow, inputs)| {
                let mut config = Config::from_document(
                    &lexis_doc::Document::empty(),
                    SettingsAnchor::filesystem("/prop"),
                )
                .unwrap();
                if let Some(system) = system {
                    config = config.with_system_dictionary(system);
                }
                for user in users {
                    config = config.with_user_dictionary(user);
                }
                if let Some(allow) = allow {
                    config = config.with_allow_empty_morpheme(allow);
                }
                for class in inputs {
                    config = config.with_plugin_class(PluginCategory::InputText, class);
                }
                config
            })
    }

    proptest! {
        #[test]
        fn prop_merge_with_empty_is_identity(config in config_strategy(), append in any::<bool>()) {
            let mode = if append { MergeMode::Append } else { MergeMode::Replace };
            prop_assert_eq!(config.merge(&Config::empty(), mode), config);
        }

        #[test]
        fn prop_append_concatenates_user_dictionaries(a in config_strategy(), b in config_strategy()) {
            let merged = a.merge(&b, MergeMode::Append);
            if !b.is_empty() {
                prop_assert_eq!(
                    merged.user_dictionaries().len(),
                    a.user_dictionaries().len() + b.user_dictionaries().len()
                );
            }
        }
    }
}
