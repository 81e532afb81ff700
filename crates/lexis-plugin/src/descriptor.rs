//! Plugin descriptors: declarative references to plugin types.

use crate::{
    Capability, Error, InstantiateError, InstantiateErrorKind, Result, TypeLoader,
};
use lexis_doc::{Document, ValueKind};
use serde_json::{Map, Value};

/// Key naming the plugin type inside a plugin list element.
pub const CLASS_KEY: &str = "class";

/// A class name plus the property bag it will be configured with.
///
/// Descriptors are plain values. Nothing is checked about the class name
/// until [`PluginDescriptor::instantiate`] runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginDescriptor {
    class_name: String,
    properties: Document,
}

impl PluginDescriptor {
    /// Descriptor with explicit properties. The `class` key is set to `class_name`.
    pub fn new(class_name: impl Into<String>, properties: Document) -> Self {
        let class_name = class_name.into();
        let mut map = properties.into_map();
        map.insert(CLASS_KEY.to_string(), Value::String(class_name.clone()));
        Self {
            class_name,
            properties: Document::from_map(map),
        }
    }

    /// Descriptor with no properties beyond the class name.
    pub fn from_class(class_name: impl Into<String>) -> Self {
        Self::new(class_name, Document::empty())
    }

    /// Extract one list element. `key` and `index` only label errors.
    pub fn from_entry(key: &str, index: usize, entry: &Value) -> Result<Self> {
        let malformed = |reason: String| Error::MalformedPluginEntry {
            key: key.to_string(),
            index,
            reason,
        };

        let map: &Map<String, Value> = entry.as_object().ok_or_else(|| {
            malformed(format!("expected an object, found {}", ValueKind::of(entry)))
        })?;
        let class_name = match map.get(CLASS_KEY) {
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(malformed(format!(
                    "'{CLASS_KEY}' must be a string, found {}",
                    ValueKind::of(other)
                )));
            }
            None => return Err(malformed(format!("missing '{CLASS_KEY}' key"))),
        };

        Ok(Self {
            class_name,
            properties: Document::from_map(map.clone()),
        })
    }

    /// Extract the descriptor list stored under `key`.
    ///
    /// An absent key yields an empty list. Any malformed element fails the
    /// whole extraction.
    pub fn list_from(doc: &Document, key: &str) -> Result<Vec<Self>> {
        let Some(entries) = doc.opt_list(key)? else {
            return Ok(Vec::new());
        };
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::from_entry(key, index, entry))
            .collect()
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The whole list element, including the `class` key.
    pub fn properties(&self) -> &Document {
        &self.properties
    }

    /// Build a new instance viewed through capability `C`.
    ///
    /// Each call constructs a fresh instance; nothing is cached.
    pub fn instantiate<C: Capability + ?Sized>(
        &self,
        loader: &dyn TypeLoader,
    ) -> std::result::Result<Box<C>, InstantiateError> {
        tracing::debug!(
            class = %self.class_name,
            capability = C::NAME,
            "Instantiating plugin"
        );
        let registered = loader.resolve(&self.class_name).ok_or_else(|| {
            tracing::debug!(class = %self.class_name, "Plugin class not found");
            InstantiateError {
                class_name: self.class_name.clone(),
                kind: InstantiateErrorKind::ClassNotFound,
            }
        })?;

        registered
            .instantiate::<C>(&self.properties)
            .map_err(|failure| {
                tracing::debug!(class = %self.class_name, %failure, "Plugin instantiation failed");
                InstantiateError {
                    class_name: self.class_name.clone(),
                    kind: failure.into(),
                }
            })
    }
}
