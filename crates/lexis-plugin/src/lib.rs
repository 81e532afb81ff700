//! Plugin system for Lexis
//!
//! Configuration documents reference plugins by class name, e.g.
//!
//! ```json
//! { "oovProviderPlugin": [{ "class": "lexis::oov::SimpleOovProvider", "cost": 12000 }] }
//! ```
//!
//! This crate turns such entries into [`PluginDescriptor`]s and, on demand,
//! into live plugin instances:
//!
//! - **Descriptors**: class name plus property bag, extracted fail-fast
//! - **Categories**: the four plugin lists a settings document can declare
//! - **Capabilities**: the trait each category's instances must implement
//! - **Type loading**: [`TypeLoader`] resolves class names; [`PluginRegistry`]
//!   backs it with an explicit table of factories
//!
//! Instantiation errors are deferred: a descriptor naming an unknown or
//! unsuitable type only fails when [`PluginDescriptor::instantiate`] runs.

pub mod builtins;
pub mod capability;
pub mod category;
pub mod connection;
pub mod descriptor;
pub mod error;
pub mod loader;

pub use capability::{
    Capability, EditConnectionCostPlugin, InputTextPlugin, OovCandidate, OovProviderPlugin,
    PathRewritePlugin,
};
pub use category::PluginCategory;
pub use connection::Connection;
pub use descriptor::PluginDescriptor;
pub use error::{
    Error, InstantiateError, InstantiateErrorKind, InstantiationFailure, PluginError, Result,
};
pub use loader::{PluginRegistry, PluginType, RegisteredType, Registration, TypeLoader};
