//! Type loading: from class names to constructible plugin types.
//!
//! Class names in settings documents are plain strings. A [`TypeLoader`]
//! maps them to a [`RegisteredType`], which knows how to build an instance,
//! hand it its properties, and view it through each capability it provides.
//! [`PluginRegistry`] is the table-backed loader filled at process start.

use crate::error::InstantiationFailure;
use crate::{Capability, PluginError};
use lexis_doc::Document;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// A concrete plugin implementation.
pub trait PluginType: Send + Sized + 'static {
    /// Build an unconfigured instance.
    fn construct() -> Result<Self, PluginError>;

    /// Receive the descriptor's property bag (including its `class` key).
    fn configure(&mut self, _properties: &Document) -> Result<(), PluginError> {
        Ok(())
    }
}

/// Resolves class names to constructible types.
pub trait TypeLoader: Send + Sync {
    fn resolve(&self, class_name: &str) -> Option<&RegisteredType>;
}

type Constructor =
    Box<dyn Fn(&Document) -> Result<Box<dyn Any + Send>, InstantiationFailure> + Send + Sync>;

type Caster<C> = Box<dyn Fn(Box<dyn Any + Send>) -> Option<Box<C>> + Send + Sync>;

struct CapabilityEntry {
    name: &'static str,
    // Holds a `Caster<C>` for the capability keyed by `TypeId::of::<C>()`
    caster: Box<dyn Any + Send + Sync>,
}

/// A type known to a loader under a class name.
pub struct RegisteredType {
    class_name: String,
    type_name: &'static str,
    construct: Constructor,
    capabilities: HashMap<TypeId, CapabilityEntry>,
}

impl RegisteredType {
    /// Start registering `T` under `class_name`.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis_plugin::{InputTextPlugin, PluginError, PluginType, RegisteredType};
    ///
    /// struct Upper;
    ///
    /// impl PluginType for Upper {
    ///     fn construct() -> Result<Self, PluginError> {
    ///         Ok(Upper)
    ///     }
    /// }
    ///
    /// impl InputTextPlugin for Upper {
    ///     fn rewrite(&self, text: &str) -> String {
    ///         text.to_uppercase()
    ///     }
    /// }
    ///
    /// let registered: RegisteredType = RegisteredType::of::<Upper>("demo::Upper")
    ///     .provides::<dyn InputTextPlugin>(|p| p as Box<dyn InputTextPlugin>)
    ///     .into();
    /// assert!(registered.provides::<dyn InputTextPlugin>());
    /// ```
    pub fn of<T: PluginType>(class_name: impl Into<String>) -> Registration<T> {
        let construct: Constructor = Box::new(
            |properties: &Document| -> Result<Box<dyn Any + Send>, InstantiationFailure> {
                let mut instance = T::construct().map_err(InstantiationFailure::Construct)?;
                instance
                    .configure(properties)
                    .map_err(InstantiationFailure::Configure)?;
                Ok(Box::new(instance))
            },
        );
        Registration {
            entry: RegisteredType {
                class_name: class_name.into(),
                type_name: std::any::type_name::<T>(),
                construct,
                capabilities: HashMap::new(),
            },
            _marker: PhantomData,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Rust type name of the implementation.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Names of the provided capabilities, sorted.
    pub fn capabilities(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.capabilities.values().map(|c| c.name).collect();
        names.sort_unstable();
        names
    }

    pub fn provides<C: Capability + ?Sized>(&self) -> bool {
        self.capabilities.contains_key(&TypeId::of::<C>())
    }

    /// Construct, configure and cast a fresh instance.
    pub fn instantiate<C: Capability + ?Sized>(
        &self,
        properties: &Document,
    ) -> Result<Box<C>, InstantiationFailure> {
        let instance = (self.construct)(properties)?;
        tracing::trace!(class = %self.class_name, "Constructed plugin instance");

        self.capabilities
            .get(&TypeId::of::<C>())
            .and_then(|entry| entry.caster.downcast_ref::<Caster<C>>())
            .and_then(|caster| caster(instance))
            .ok_or_else(|| InstantiationFailure::MissingCapability {
                capability: C::NAME,
                type_name: self.type_name,
                provided: self.capabilities().join(", "),
            })
    }
}

impl fmt::Debug for RegisteredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredType")
            .field("class_name", &self.class_name)
            .field("type_name", &self.type_name)
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

/// Builder returned by [`RegisteredType::of`].
pub struct Registration<T: PluginType> {
    entry: RegisteredType,
    _marker: PhantomData<fn() -> T>,
}

impl<T: PluginType> Registration<T> {
    /// Declare that `T` provides capability `C`, given the upcast to its trait object.
    pub fn provides<C: Capability + ?Sized>(mut self, upcast: fn(Box<T>) -> Box<C>) -> Self {
        let caster: Caster<C> = Box::new(move |instance: Box<dyn Any + Send>| {
            instance.downcast::<T>().ok().map(upcast)
        });
        self.entry.capabilities.insert(
            TypeId::of::<C>(),
            CapabilityEntry {
                name: C::NAME,
                caster: Box::new(caster),
            },
        );
        self
    }

    pub fn build(self) -> RegisteredType {
        self.entry
    }
}

impl<T: PluginType> From<Registration<T>> for RegisteredType {
    fn from(registration: Registration<T>) -> Self {
        registration.build()
    }
}

/// Table of plugin types keyed by class name.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    types: HashMap<String, RegisteredType>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in plugins.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for registered in crate::builtins::builtin_types() {
            registry.register(registered);
        }
        registry
    }

    /// Register a type. An existing entry with the same class name is replaced.
    pub fn register(&mut self, registered: impl Into<RegisteredType>) {
        let registered = registered.into();
        tracing::debug!(
            class = %registered.class_name,
            capabilities = ?registered.capabilities(),
            "Registered plugin type"
        );
        self.types.insert(registered.class_name.clone(), registered);
    }

    pub fn get(&self, class_name: &str) -> Option<&RegisteredType> {
        self.types.get(class_name)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.types.contains_key(class_name)
    }

    /// Registered class names, sorted.
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeLoader for PluginRegistry {
    fn resolve(&self, class_name: &str) -> Option<&RegisteredType> {
        self.get(class_name)
    }
}
