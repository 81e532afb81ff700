//! Layered settings resolution for the Lexis analyzer
//!
//! This crate turns settings documents into a [`Config`]:
//!
//! - **Path settings**: dictionary and character-definition paths, resolved
//!   lazily through the anchor of the layer that supplied them
//! - **Plugin lists**: ordered [`PluginDescriptor`]s per category,
//!   instantiated only when the engine needs them
//! - **Merging**: combine a base and an override layer under
//!   [`MergeMode::Replace`] or [`MergeMode::Append`]
//! - **Resolution**: [`ConfigResolver`] stacks the shipped defaults, the
//!   user's global settings, a project file and inline JSON
//!
//! # Example
//!
//! ```
//! use lexis_config::{Config, MergeMode, SettingsAnchor};
//!
//! let base = Config::from_builtin().unwrap();
//! let project = Config::from_json_str(
//!     r#"{"systemDict": "project.dic"}"#,
//!     SettingsAnchor::filesystem("/srv/lexis"),
//! )
//! .unwrap();
//!
//! let merged = base.merge(&project, MergeMode::Replace);
//! let location = merged.system_dictionary().unwrap().resolve().unwrap();
//! assert!(location.ends_with("project.dic"));
//! ```

pub mod config;
pub mod error;
pub mod load;
pub mod logging;
pub mod merge;
pub mod path_setting;
pub mod resolver;
pub mod resources;
pub mod summary;

pub use config::Config;
pub use error::{Error, Result};
pub use lexis_fs::{Bundle, Location, SettingsAnchor};
pub use lexis_plugin::{PluginCategory, PluginDescriptor, PluginRegistry, TypeLoader};
pub use merge::MergeMode;
pub use path_setting::PathSetting;
pub use resolver::ConfigResolver;
pub use resources::builtin_bundle;
pub use summary::{ConfigSummary, PathSummary};
