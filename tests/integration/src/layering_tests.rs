//! Layer ordering and anchor binding across the resolver's sources

use lexis_config::{ConfigResolver, Location, MergeMode, PathSetting};
use lexis_test_utils::TestBundle;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

struct Layers {
    global: TempDir,
    project: lexis_test_utils::BundleFixture,
}

impl Layers {
    fn new() -> Self {
        let global = TempDir::new().unwrap();
        fs::write(
            global.path().join("lexis.json"),
            r#"{"userDict": ["global.dic"], "allowEmptyMorpheme": false}"#,
        )
        .unwrap();
        fs::write(global.path().join("global.dic"), "global").unwrap();

        let project = TestBundle::new("project")
            .file(
                "settings.json",
                r#"{"userDict": ["project.dic"], "characterDefinitionFile": "char.def"}"#,
            )
            .file("project.dic", "project")
            .build();

        Self { global, project }
    }

    fn resolver(&self, mode: MergeMode) -> ConfigResolver {
        ConfigResolver::new()
            .with_global_config_dir(self.global.path())
            .with_settings_file(self.project.path("settings.json"))
            .with_mode(mode)
    }
}

fn raws(settings: &[PathSetting]) -> Vec<&str> {
    settings.iter().map(PathSetting::raw).collect()
}

#[rstest]
#[case(MergeMode::Replace, vec!["project.dic"])]
#[case(MergeMode::Append, vec!["global.dic", "project.dic"])]
fn test_user_dictionaries_per_mode(#[case] mode: MergeMode, #[case] expected: Vec<&str>) {
    let layers = Layers::new();
    let config = layers.resolver(mode).resolve().unwrap();
    assert_eq!(raws(config.user_dictionaries()), expected);
}

#[test]
fn test_each_path_reads_from_its_own_layer() {
    let layers = Layers::new();
    let config = layers.resolver(MergeMode::Append).resolve().unwrap();

    let contents: Vec<String> = config
        .user_dictionaries()
        .iter()
        .map(|setting| setting.read_to_string().unwrap())
        .collect();
    assert_eq!(contents, vec!["global", "project"]);
}

#[test]
fn test_project_file_falls_back_to_bundle() {
    let layers = Layers::new();
    let config = layers.resolver(MergeMode::Replace).resolve().unwrap();

    // The project names char.def but does not ship one
    let char_def = config.character_definition().unwrap().resolve().unwrap();
    assert!(matches!(char_def, Location::Bundle(_)));

    // Once it does, the local file wins
    layers.project.write("char.def", "LOCAL 0 1 0");
    let char_def = config.character_definition().unwrap().resolve().unwrap();
    assert!(matches!(char_def, Location::File(_)));
}

#[test]
fn test_inline_layer_is_last() {
    let layers = Layers::new();
    let config = layers
        .resolver(MergeMode::Replace)
        .with_inline_settings(r#"{"allowEmptyMorpheme": true, "systemDict": "inline.dic"}"#)
        .resolve()
        .unwrap();

    assert_eq!(config.allow_empty_morpheme(), Some(true));
    assert_eq!(config.system_dictionary().unwrap().raw(), "inline.dic");
}

#[test]
fn test_scalar_from_global_survives_project() {
    let layers = Layers::new();
    let config = layers.resolver(MergeMode::Replace).resolve().unwrap();
    assert_eq!(config.allow_empty_morpheme(), Some(false));
}

#[test]
fn test_summary_reflects_layers() {
    let layers = Layers::new();
    let summary = layers.resolver(MergeMode::Append).resolve().unwrap().summary();
    let json = summary.to_json();

    assert_eq!(json["userDictionaries"].as_array().unwrap().len(), 2);
    assert_eq!(json["userDictionaries"][1]["raw"], "project.dic");
    assert!(
        json["userDictionaries"][1]["resolved"]
            .as_str()
            .unwrap()
            .ends_with("project.dic")
    );
    assert_eq!(json["allowEmptyMorpheme"], serde_json::json!(false));
    assert!(summary.plugin_count() >= 4);
}
