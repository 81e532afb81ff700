//! End-to-end test for the whole settings pipeline
//!
//! Settings text -> layered Config -> plugin instances -> work on real input.

use lexis_config::{Config, ConfigResolver, MergeMode, PluginCategory, PluginRegistry};
use lexis_plugin::builtins::INHIBIT_CONNECTION;
use lexis_plugin::{
    Connection, EditConnectionCostPlugin, InputTextPlugin, PathRewritePlugin, PluginDescriptor,
    PluginError, PluginType, RegisteredType,
};
use lexis_test_utils::TestBundle;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Project settings that add a connection editor on top of the defaults
fn project_settings() -> String {
    format!(
        r#"{{
            "systemDict": "project.dic",
            "userDict": ["names.dic"],
            "editConnectionCostPlugin": [{{
                "class": "{INHIBIT_CONNECTION}",
                "inhibitedPair": [[0, 1], [2, 2]]
            }}]
        }}"#
    )
}

#[test]
fn test_full_pipeline() {
    let global = TempDir::new().unwrap();
    let project = TestBundle::new("project")
        .file("lexis.json", project_settings())
        .file("project.dic", "binary dictionary")
        .file("names.dic", "user dictionary")
        .build();

    let config = ConfigResolver::new()
        .with_global_config_dir(global.path())
        .with_settings_file(project.path("lexis.json"))
        .resolve()
        .unwrap();

    // Paths from the project file resolve next to it
    assert_eq!(
        config.system_dictionary().unwrap().read_to_string().unwrap(),
        "binary dictionary"
    );
    assert_eq!(
        config.user_dictionaries()[0].read_to_string().unwrap(),
        "user dictionary"
    );
    // Paths from the defaults still resolve into the builtin bundle
    assert!(
        config
            .character_definition()
            .unwrap()
            .resolve()
            .unwrap()
            .ends_with("char.def")
    );

    let registry = PluginRegistry::with_builtins();

    let inputs = config
        .instantiate_plugins::<dyn InputTextPlugin>(&registry)
        .unwrap();
    let normalized = inputs
        .iter()
        .fold("ラーーメン".to_string(), |text, plugin| plugin.rewrite(&text));
    assert_eq!(normalized, "ラーメン");

    let rewriters = config
        .instantiate_plugins::<dyn PathRewritePlugin>(&registry)
        .unwrap();
    let path: Vec<String> = ["1", "2", "月"].iter().map(|s| s.to_string()).collect();
    assert_eq!(rewriters[0].rewrite(path), vec!["12", "月"]);

    let editors = config
        .instantiate_plugins::<dyn EditConnectionCostPlugin>(&registry)
        .unwrap();
    let mut connection = Connection::zeroed(3, 3).unwrap();
    let original = connection.clone();
    for editor in &editors {
        editor.edit(&mut connection).unwrap();
    }
    assert_eq!(connection.cost(0, 1), Some(i16::MAX));
    assert_eq!(connection.cost(2, 2), Some(i16::MAX));
    assert_eq!(connection.cost(1, 0), Some(0));
    assert_eq!(original.cost(0, 1), Some(0));
}

#[test]
fn test_editor_rejects_out_of_range_pair() {
    let config = Config::empty().with_plugin(
        PluginCategory::EditConnectionCost,
        PluginDescriptor::new(
            INHIBIT_CONNECTION,
            lexis_doc::Document::parse(r#"{"inhibitedPair": [[5, 0]]}"#).unwrap(),
        ),
    );
    let registry = PluginRegistry::with_builtins();
    let editors = config
        .instantiate_plugins::<dyn EditConnectionCostPlugin>(&registry)
        .unwrap();

    let mut connection = Connection::zeroed(2, 2).unwrap();
    let err = editors[0].edit(&mut connection).unwrap_err();
    assert!(matches!(err, PluginError::ConnectionOutOfRange { left: 5, .. }));
}

struct Shout {
    suffix: String,
}

impl PluginType for Shout {
    fn construct() -> Result<Self, PluginError> {
        Ok(Self {
            suffix: String::new(),
        })
    }

    fn configure(&mut self, properties: &lexis_doc::Document) -> Result<(), PluginError> {
        self.suffix = properties.get_string_or("suffix", "!")?.to_string();
        Ok(())
    }
}

impl InputTextPlugin for Shout {
    fn rewrite(&self, text: &str) -> String {
        format!("{}{}", text.to_uppercase(), self.suffix)
    }
}

#[test]
fn test_application_registered_plugin() {
    let mut registry = PluginRegistry::with_builtins();
    registry.register(
        RegisteredType::of::<Shout>("app::Shout")
            .provides::<dyn InputTextPlugin>(|p| p as Box<dyn InputTextPlugin>),
    );

    let base = Config::from_builtin().unwrap();
    let app = Config::from_json_str(
        r#"{"inputTextPlugin": [{"class": "app::Shout", "suffix": "!!"}]}"#,
        lexis_config::SettingsAnchor::none(),
    )
    .unwrap();

    let replaced = base.merge(&app, MergeMode::Replace);
    let plugins = replaced
        .instantiate_plugins::<dyn InputTextPlugin>(&registry)
        .unwrap();
    assert_eq!(plugins.len(), 1);
    assert_eq!(plugins[0].rewrite("hi"), "HI!!");

    let appended = base.merge(&app, MergeMode::Append);
    let plugins = appended
        .instantiate_plugins::<dyn InputTextPlugin>(&registry)
        .unwrap();
    let text = plugins
        .iter()
        .fold("Hi".to_string(), |text, plugin| plugin.rewrite(&text));
    assert_eq!(text, "HI!!");
}
