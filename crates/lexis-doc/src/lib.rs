//! Settings document model for Lexis
//!
//! A [`Document`] is one parsed configuration layer: an ordered map of string
//! keys to JSON values. It is immutable once built and exposes typed
//! accessors that fail explicitly when a value has the wrong shape.

pub mod document;
pub mod error;

pub use document::{Document, ValueKind};
pub use error::{Error, Result};
pub use serde_json::{Map, Value};
