//! Resolved resource locations

use crate::{BundleResource, Error, Result};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a resolved resource lives.
///
/// Loaders only need [`Location::open`]; the variant tells diagnostics and
/// tests which anchor produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    File(PathBuf),
    Bundle(BundleResource),
}

impl Location {
    /// Open the resource for reading.
    pub fn open(&self) -> Result<Box<dyn Read + Send>> {
        match self {
            Self::File(path) => {
                let file = std::fs::File::open(path).map_err(|e| Error::io_path(path, e))?;
                Ok(Box::new(file))
            }
            Self::Bundle(resource) => resource.open(),
        }
    }

    /// Read the whole resource as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String> {
        crate::io::read_text(self)
    }

    /// Read the whole resource as bytes.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        crate::io::read_bytes(self)
    }

    /// Path on disk, when there is one.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Bundle(resource) => resource.path(),
        }
    }

    /// Whether the location currently points at something readable.
    pub fn exists(&self) -> bool {
        match self {
            Self::File(path) => path.is_file(),
            Self::Bundle(resource) => resource.path().is_none_or(Path::is_file),
        }
    }

    /// Component-wise suffix check, e.g. `ends_with("char.def")`.
    pub fn ends_with(&self, suffix: impl AsRef<Path>) -> bool {
        match self {
            Self::File(path) => path.ends_with(suffix),
            Self::Bundle(resource) => Path::new(resource.name()).ends_with(suffix),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Bundle(resource) => f.write_str(&resource.url()),
        }
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<BundleResource> for Location {
    fn from(resource: BundleResource) -> Self {
        Self::Bundle(resource)
    }
}
