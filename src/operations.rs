//! Read-only filesystem queries, behind a trait so tests can fake them.
//!
//! Only "what is there" questions go through here: the project-root check,
//! bundle resolution, and the hook step's `.git/hooks` probe. Writes live in
//! [`crate::resources`].

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Filesystem questions asked while planning an install.
pub trait FileSystemOps: Send + Sync + std::fmt::Debug {
    /// Whether `path` is a regular file (symlinks followed).
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` is a directory (symlinks followed).
    fn is_dir(&self, path: &Path) -> bool;

    /// Full paths of the entries directly inside `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be listed.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(path)? {
            paths.push(entry?.path());
        }
        Ok(paths)
    }
}

/// In-memory [`FileSystemOps`] for unit tests.
///
/// ```ignore
/// let fs = MockFileSystemOps::new()
///     .with_file("/bundle/configs/swiftlint.yml")
///     .with_dir_entries("/app", vec![PathBuf::from("/app/App.xcodeproj")]);
/// ```
///
/// Listing a directory without configured entries is an error, like an
/// unreadable directory would be.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFileSystemOps {
    files: std::collections::BTreeSet<PathBuf>,
    dirs: std::collections::BTreeMap<PathBuf, Option<Vec<PathBuf>>>,
}

#[cfg(test)]
impl MockFileSystemOps {
    /// Nothing exists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    /// Add a directory that cannot be listed.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.entry(path.into()).or_insert(None);
        self
    }

    /// Add a directory listing `entries`.
    #[must_use]
    pub fn with_dir_entries(mut self, dir: impl Into<PathBuf>, entries: Vec<PathBuf>) -> Self {
        self.dirs.insert(dir.into(), Some(entries));
        self
    }
}

#[cfg(test)]
impl FileSystemOps for MockFileSystemOps {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains_key(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        match self.dirs.get(path) {
            Some(Some(entries)) => Ok(entries.clone()),
            _ => anyhow::bail!("cannot list {}", path.display()),
        }
    }
}
