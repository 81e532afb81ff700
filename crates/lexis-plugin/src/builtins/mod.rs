//! Built-in plugin registrations.
//!
//! These are the types the shipped default settings refer to. Every
//! registration lives in [`builtin_types`].

mod connection;
mod input;
mod oov;
mod path;

pub use connection::InhibitConnection;
pub use input::{LowercaseInputText, ProlongedSoundMarkInputText};
pub use oov::SimpleOovProvider;
pub use path::JoinNumeric;

use crate::{
    EditConnectionCostPlugin, InputTextPlugin, OovProviderPlugin, PathRewritePlugin,
    RegisteredType,
};

pub const LOWERCASE_INPUT_TEXT: &str = "lexis::input::LowercaseInputText";
pub const PROLONGED_SOUND_MARK_INPUT_TEXT: &str = "lexis::input::ProlongedSoundMarkInputText";
pub const SIMPLE_OOV_PROVIDER: &str = "lexis::oov::SimpleOovProvider";
pub const JOIN_NUMERIC: &str = "lexis::path::JoinNumeric";
pub const INHIBIT_CONNECTION: &str = "lexis::connection::InhibitConnection";

/// Number of built-in plugin types.
pub const BUILTIN_COUNT: usize = 5;

/// Returns all built-in plugin registrations.
pub fn builtin_types() -> Vec<RegisteredType> {
    vec![
        RegisteredType::of::<LowercaseInputText>(LOWERCASE_INPUT_TEXT)
            .provides::<dyn InputTextPlugin>(|p| p as Box<dyn InputTextPlugin>)
            .build(),
        RegisteredType::of::<ProlongedSoundMarkInputText>(PROLONGED_SOUND_MARK_INPUT_TEXT)
            .provides::<dyn InputTextPlugin>(|p| p as Box<dyn InputTextPlugin>)
            .build(),
        RegisteredType::of::<SimpleOovProvider>(SIMPLE_OOV_PROVIDER)
            .provides::<dyn OovProviderPlugin>(|p| p as Box<dyn OovProviderPlugin>)
            .build(),
        RegisteredType::of::<JoinNumeric>(JOIN_NUMERIC)
            .provides::<dyn PathRewritePlugin>(|p| p as Box<dyn PathRewritePlugin>)
            .build(),
        RegisteredType::of::<InhibitConnection>(INHIBIT_CONNECTION)
            .provides::<dyn EditConnectionCostPlugin>(|p| p as Box<dyn EditConnectionCostPlugin>)
            .build(),
    ]
}
