//! Conventional resource names.

/// Name of the settings document every assembled bundle ships.
pub const DEFAULT_SETTINGS_FILE: &str = "lexis.json";

/// Name of the character definition resource referenced by the default settings.
pub const CHAR_DEFINITION_FILE: &str = "char.def";
