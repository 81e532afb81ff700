//! Settings anchors: what relative resource paths are relative to.

use crate::{Bundle, Error, Location, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Strategy for turning a relative resource name into a [`Location`].
///
/// Anchors are fixed when a configuration layer is built and never change
/// afterwards. Resolution happens lazily, when a path is actually needed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsAnchor {
    /// Resolve inside a resource bundle
    Bundle(Bundle),
    /// Resolve by joining with a directory
    Filesystem { root: PathBuf },
    /// Refuse to resolve anything
    #[default]
    None,
    /// Resolve through the first anchor that has the resource
    Chain(Vec<SettingsAnchor>),
}

impl SettingsAnchor {
    pub fn bundle(bundle: Bundle) -> Self {
        Self::Bundle(bundle)
    }

    /// Anchor at a directory. An empty path means the current directory.
    pub fn filesystem(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if root.as_os_str().is_empty() {
            Self::current_dir()
        } else {
            Self::Filesystem { root }
        }
    }

    /// Anchor at the process working directory, captured now.
    ///
    /// If the working directory cannot be read, a warning is logged and the
    /// anchor falls back to a relative root, which the OS resolves at read time.
    pub fn current_dir() -> Self {
        Self::try_current_dir().unwrap_or_else(|error| {
            tracing::warn!(%error, "Working directory unavailable, anchoring at a relative root");
            Self::Filesystem {
                root: PathBuf::new(),
            }
        })
    }

    /// Like [`SettingsAnchor::current_dir`], but reports an unreadable working directory.
    pub fn try_current_dir() -> Result<Self> {
        let root = std::env::current_dir().map_err(|e| Error::io("current directory", e))?;
        Ok(Self::Filesystem { root })
    }

    pub fn none() -> Self {
        Self::None
    }

    /// Chain `other` after this anchor. Nested chains are flattened.
    pub fn and_then(self, other: SettingsAnchor) -> Self {
        let mut anchors = self.into_chain();
        anchors.extend(other.into_chain());
        Self::Chain(anchors)
    }

    fn into_chain(self) -> Vec<SettingsAnchor> {
        match self {
            Self::Chain(anchors) => anchors,
            other => vec![other],
        }
    }

    /// Resolve `name` to a location.
    ///
    /// Filesystem anchors do not check that the file exists; bundle anchors
    /// fail with [`Error::ResourceNotFound`] when no root has the resource.
    pub fn resolve(&self, name: &str) -> Result<Location> {
        match self {
            Self::Bundle(bundle) => bundle.get(name).map(Location::Bundle),
            Self::Filesystem { root } => Ok(Location::File(root.join(name))),
            Self::None => Err(Error::ResolutionUnsupported {
                name: name.to_string(),
            }),
            Self::Chain(anchors) => {
                if let Some(anchor) = anchors.iter().find(|a| a.exists(name)) {
                    tracing::trace!(name, %anchor, "Resolved through chain member");
                    return anchor.resolve(name);
                }
                match anchors.last() {
                    Some(last) => last.resolve(name),
                    None => Err(Error::ResolutionUnsupported {
                        name: name.to_string(),
                    }),
                }
            }
        }
    }

    /// Whether `name` resolves to something readable through this anchor.
    pub fn exists(&self, name: &str) -> bool {
        match self {
            Self::Bundle(bundle) => bundle.contains(name),
            Self::Filesystem { root } => root.join(name).is_file(),
            Self::None => false,
            Self::Chain(anchors) => anchors.iter().any(|a| a.exists(name)),
        }
    }

    /// Directory root of a filesystem anchor.
    pub fn root(&self) -> Option<&Path> {
        match self {
            Self::Filesystem { root } => Some(root),
            _ => None,
        }
    }
}

impl fmt::Display for SettingsAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundle(bundle) => write!(f, "bundle:{}", bundle.name()),
            Self::Filesystem { root } => write!(f, "filesystem:{}", root.display()),
            Self::None => f.write_str("none"),
            Self::Chain(anchors) => {
                f.write_str("chain[")?;
                for (i, anchor) in anchors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{anchor}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EmbeddedResource;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    static RESOURCES: &[EmbeddedResource] = &[EmbeddedResource::new("char.def", b"DEFAULT 0 1 0")];

    #[test]
    fn test_filesystem_joins_root() {
        let anchor = SettingsAnchor::filesystem("/usr");
        let location = anchor.resolve("test").unwrap();
        assert_eq!(location, Location::File(PathBuf::from("/usr/test")));
    }

    #[test]
    fn test_filesystem_does_not_check_existence() {
        let temp = TempDir::new().unwrap();
        let anchor = SettingsAnchor::filesystem(temp.path());
        let location = anchor.resolve("missing.dic").unwrap();
        assert!(!location.exists());
        assert!(!anchor.exists("missing.dic"));
    }

    #[test]
    fn test_empty_root_means_current_dir() {
        let anchor = SettingsAnchor::filesystem("");
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(anchor.root(), Some(cwd.as_path()));
    }

    #[test]
    fn test_try_current_dir_matches_process() {
        let anchor = SettingsAnchor::try_current_dir().unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(anchor.root(), Some(cwd.as_path()));
        assert_eq!(SettingsAnchor::current_dir(), anchor);
    }

    #[test]
    fn test_bundle_resolution() {
        let anchor = SettingsAnchor::bundle(Bundle::embedded("builtin", RESOURCES));
        let location = anchor.resolve("char.def").unwrap();
        assert!(location.ends_with("char.def"));
        assert_eq!(location.to_string(), "bundle://builtin/char.def");
        assert_eq!(location.read_to_string().unwrap(), "DEFAULT 0 1 0");

        assert!(matches!(
            anchor.resolve("system.dic"),
            Err(Error::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_none_never_resolves() {
        let anchor = SettingsAnchor::none();
        assert!(matches!(
            anchor.resolve("system.dic"),
            Err(Error::ResolutionUnsupported { ref name }) if name == "system.dic"
        ));
        assert!(!anchor.exists("system.dic"));
    }

    #[test]
    fn test_chain_prefers_first_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("char.def"), "LOCAL 1 1 0").unwrap();

        let anchor = SettingsAnchor::filesystem(temp.path())
            .and_then(SettingsAnchor::bundle(Bundle::embedded("builtin", RESOURCES)));

        let location = anchor.resolve("char.def").unwrap();
        assert!(matches!(location, Location::File(_)));
        assert_eq!(location.read_to_string().unwrap(), "LOCAL 1 1 0");
    }

    #[test]
    fn test_chain_falls_through_to_bundle() {
        let temp = TempDir::new().unwrap();
        let anchor = SettingsAnchor::filesystem(temp.path())
            .and_then(SettingsAnchor::bundle(Bundle::embedded("builtin", RESOURCES)));

        let location = anchor.resolve("char.def").unwrap();
        assert!(matches!(location, Location::Bundle(_)));
    }

    #[test]
    fn test_chain_reports_last_anchor_error() {
        let temp = TempDir::new().unwrap();
        let anchor = SettingsAnchor::filesystem(temp.path())
            .and_then(SettingsAnchor::bundle(Bundle::embedded("builtin", RESOURCES)));

        assert!(matches!(
            anchor.resolve("absent.dic"),
            Err(Error::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_and_then_flattens() {
        let chain = SettingsAnchor::none()
            .and_then(SettingsAnchor::filesystem("/a"))
            .and_then(SettingsAnchor::filesystem("/b"));
        match &chain {
            SettingsAnchor::Chain(anchors) => assert_eq!(anchors.len(), 3),
            other => panic!("expected chain, got {other}"),
        }
        assert_eq!(chain.to_string(), "chain[none, filesystem:/a, filesystem:/b]");
    }
}
