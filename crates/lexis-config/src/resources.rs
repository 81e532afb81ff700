//! Resources shipped inside the binary.

use lexis_fs::{Bundle, CHAR_DEFINITION_FILE, DEFAULT_SETTINGS_FILE, EmbeddedResource};

/// Name of the builtin bundle.
pub const BUILTIN_BUNDLE_NAME: &str = "lexis";

/// Default settings and the resources they reference.
pub static BUILTIN_RESOURCES: &[EmbeddedResource] = &[
    EmbeddedResource::new(
        DEFAULT_SETTINGS_FILE,
        include_bytes!("../resources/lexis.json"),
    ),
    EmbeddedResource::new(CHAR_DEFINITION_FILE, include_bytes!("../resources/char.def")),
];

/// The bundle every build carries.
pub fn builtin_bundle() -> Bundle {
    Bundle::embedded(BUILTIN_BUNDLE_NAME, BUILTIN_RESOURCES)
}
