//! Resource resolution for Lexis settings
//!
//! Settings documents name their resources (dictionaries, character
//! definitions) with relative paths. A [`SettingsAnchor`] decides what such a
//! path is relative to:
//!
//! - **Bundle** - a [`Bundle`] of resource roots, the counterpart of a classpath
//! - **Filesystem** - a directory on disk
//! - **None** - nothing; resolution always fails
//! - **Chain** - several anchors tried in order
//!
//! Resolution produces a [`Location`] that can be opened for reading no matter
//! which anchor produced it.

pub mod anchor;
pub mod bundle;
pub mod constants;
pub mod error;
pub mod io;
pub mod location;

pub use anchor::SettingsAnchor;
pub use bundle::{Bundle, BundleResource, BundleRoot, EmbeddedResource};
pub use constants::{CHAR_DEFINITION_FILE, DEFAULT_SETTINGS_FILE};
pub use error::{Error, Result};
pub use location::Location;
