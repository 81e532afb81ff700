//! [`TestBundle`] builder for settings and resource fixtures.

use lexis_fs::{Bundle, DEFAULT_SETTINGS_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Describes the files of a directory-backed bundle before they are written.
///
/// # Example
///
/// ```rust
/// use lexis_test_utils::TestBundle;
///
/// let fixture = TestBundle::new("app")
///     .settings(r#"{"systemDict": "system.dic"}"#)
///     .file("system.dic", "")
///     .build();
/// assert!(fixture.bundle().contains("lexis.json"));
/// ```
#[derive(Debug, Clone)]
pub struct TestBundle {
    name: String,
    files: Vec<(String, Vec<u8>)>,
}

impl TestBundle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    /// Add a file at a bundle-relative, slash-separated path.
    pub fn file(mut self, name: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        self.files.push((name.into(), content.as_ref().to_vec()));
        self
    }

    /// Add the bundle's default settings resource.
    pub fn settings(self, json: &str) -> Self {
        self.file(DEFAULT_SETTINGS_FILE, json)
    }

    /// Write every file into a fresh temporary directory.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn build(self) -> BundleFixture {
        let temp_dir = TempDir::new()
            .unwrap_or_else(|e| panic!("TestBundle::build: failed to create temp dir: {e}"));
        let fixture = BundleFixture {
            temp_dir,
            name: self.name,
        };
        for (name, content) in &self.files {
            fixture.write(name, content);
        }
        fixture
    }
}

/// A bundle written to a temporary directory, removed on drop.
#[derive(Debug)]
pub struct BundleFixture {
    temp_dir: TempDir,
    name: String,
}

impl BundleFixture {
    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a bundle-relative file.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// A bundle with the fixture directory as its only root.
    pub fn bundle(&self) -> Bundle {
        Bundle::new(self.name.clone()).with_directory(self.root())
    }

    /// Write or overwrite a file, creating parent directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("BundleFixture::write: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("BundleFixture::write: failed to write {}: {e}", path.display()));
        path
    }
}
