//! Resource bundles: ordered sets of resource roots.
//!
//! A bundle plays the role a classpath plays elsewhere. Resources are looked
//! up by a relative, slash-separated name in each root, front to back. Roots
//! are directories on disk or tables of resources embedded in the binary.

use crate::{Error, Result};
use std::io::{Cursor, Read};
use std::path::{Component, Path, PathBuf};

/// A resource compiled into the binary, typically with `include_bytes!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedResource {
    pub name: &'static str,
    pub bytes: &'static [u8],
}

impl EmbeddedResource {
    pub const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, bytes }
    }
}

/// One place a bundle looks for resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleRoot {
    Directory(PathBuf),
    Embedded(&'static [EmbeddedResource]),
}

/// An ordered collection of resource roots under a single name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    name: String,
    roots: Vec<BundleRoot>,
}

impl Bundle {
    /// Create a bundle with no roots. Every lookup fails until roots are added.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roots: Vec::new(),
        }
    }

    /// Create a bundle backed by a single directory, named after it.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        Self::new(name).with_directory(dir)
    }

    /// Create a bundle backed by embedded resources.
    pub fn embedded(name: impl Into<String>, resources: &'static [EmbeddedResource]) -> Self {
        Self::new(name).with_embedded(resources)
    }

    /// Append a directory root. Later roots are searched after earlier ones.
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let dir = dunce::canonicalize(&dir).unwrap_or(dir);
        self.roots.push(BundleRoot::Directory(dir));
        self
    }

    /// Append an embedded root.
    pub fn with_embedded(mut self, resources: &'static [EmbeddedResource]) -> Self {
        self.roots.push(BundleRoot::Embedded(resources));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roots(&self) -> &[BundleRoot] {
        &self.roots
    }

    /// Look a resource up in every root, first match wins.
    pub fn find(&self, name: &str) -> Option<BundleResource> {
        let normalized = normalize_name(name)?;
        self.roots.iter().find_map(|root| match root {
            BundleRoot::Directory(dir) => {
                let path = dir.join(&normalized);
                path.is_file().then(|| BundleResource {
                    bundle: self.name.clone(),
                    name: normalized.clone(),
                    source: ResourceSource::File(path),
                })
            }
            BundleRoot::Embedded(resources) => resources
                .iter()
                .find(|r| r.name == normalized)
                .map(|r| BundleResource {
                    bundle: self.name.clone(),
                    name: normalized.clone(),
                    source: ResourceSource::Static(r.bytes),
                }),
        })
    }

    /// Like [`Bundle::find`], but a missing resource is an error.
    pub fn get(&self, name: &str) -> Result<BundleResource> {
        self.find(name).ok_or_else(|| Error::ResourceNotFound {
            bundle: self.name.clone(),
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

/// Normalize a resource name to a relative, slash-separated form.
///
/// Returns `None` for names that would leave the bundle root.
fn normalize_name(name: &str) -> Option<String> {
    let unified = name.replace('\\', "/");
    let mut parts = Vec::new();
    for component in Path::new(&unified).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir | Component::RootDir => {}
            Component::ParentDir | Component::Prefix(_) => return None,
        }
    }
    (!parts.is_empty()).then(|| parts.join("/"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ResourceSource {
    File(PathBuf),
    Static(&'static [u8]),
}

/// A resource found inside a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleResource {
    bundle: String,
    name: String,
    source: ResourceSource,
}

impl BundleResource {
    /// Name of the bundle the resource was found in.
    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    /// Normalized, bundle-relative resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path on disk, if the resource came from a directory root.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ResourceSource::File(path) => Some(path),
            ResourceSource::Static(_) => None,
        }
    }

    /// Whether the resource is compiled into the binary.
    pub fn is_embedded(&self) -> bool {
        matches!(self.source, ResourceSource::Static(_))
    }

    pub fn open(&self) -> Result<Box<dyn Read + Send>> {
        match &self.source {
            ResourceSource::File(path) => {
                let file = std::fs::File::open(path).map_err(|e| Error::io_path(path, e))?;
                Ok(Box::new(file))
            }
            ResourceSource::Static(bytes) => Ok(Box::new(Cursor::new(*bytes))),
        }
    }

    /// Locator in the form `bundle://<bundle>/<name>`.
    pub fn url(&self) -> String {
        format!("bundle://{}/{}", self.bundle, self.name)
    }
}
