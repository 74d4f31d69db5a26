//! Resource locator: logical resource names to paths inside the bundle.
//!
//! The installer never builds bundle paths itself.  It asks a
//! [`ResourceLocator`] for each [`ResourceKind`] and treats `None` as
//! "not shipped", which is a warning, never an error.
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::operations::{FileSystemOps, SystemFileSystemOps};

/// Environment variable overriding the bundle directory.
pub const RESOURCES_ENV: &str = "DEVTOOLS_SETUP_RESOURCES";

/// Logical resources shipped in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Lint rule file copied to the project root.
    LintConfig,
    /// Format rule file copied to the project root.
    FormatConfig,
    /// Directory holding the git hook scripts.
    ScriptsDir,
    /// Directory tree copied as project templates.
    TemplatesDir,
}

impl ResourceKind {
    /// Every kind, in resolution order.
    pub const ALL: [Self; 4] = [
        Self::LintConfig,
        Self::FormatConfig,
        Self::ScriptsDir,
        Self::TemplatesDir,
    ];

    /// Location of this resource relative to the bundle root.
    #[must_use]
    pub const fn bundle_path(self) -> &'static str {
        match self {
            Self::LintConfig => "configs/swiftlint.yml",
            Self::FormatConfig => "configs/swiftformat",
            Self::ScriptsDir => "scripts",
            Self::TemplatesDir => "templates",
        }
    }

    /// Whether the resource is a directory rather than a single file.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::ScriptsDir | Self::TemplatesDir)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LintConfig => "lint config",
            Self::FormatConfig => "format config",
            Self::ScriptsDir => "scripts directory",
            Self::TemplatesDir => "templates directory",
        };
        f.write_str(name)
    }
}

/// Resolves logical resource names to filesystem paths.
///
/// Implementations are stateless: every call resolves independently and has
/// no side effects.
#[cfg_attr(test, mockall::automock)]
pub trait ResourceLocator: Send + Sync {
    /// Return the path of `kind`, or `None` if the bundle does not ship it.
    fn resolve(&self, kind: ResourceKind) -> Option<PathBuf>;
}

/// [`ResourceLocator`] backed by a bundle directory on disk.
///
/// A locator without a root resolves every kind to `None`.
#[derive(Debug)]
pub struct BundleLocator {
    root: Option<PathBuf>,
    fs_ops: Arc<dyn FileSystemOps>,
}

impl BundleLocator {
    /// Create a locator for the bundle at `root`.
    #[must_use]
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root,
            fs_ops: Arc::new(SystemFileSystemOps),
        }
    }

    /// Replace the filesystem query backend (used by tests).
    #[must_use]
    pub fn with_fs_ops(mut self, fs_ops: Arc<dyn FileSystemOps>) -> Self {
        self.fs_ops = fs_ops;
        self
    }

    /// Bundle root this locator resolves against.
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
}

impl ResourceLocator for BundleLocator {
    fn resolve(&self, kind: ResourceKind) -> Option<PathBuf> {
        let path = self.root.as_ref()?.join(kind.bundle_path());
        let present = if kind.is_dir() {
            self.fs_ops.is_dir(&path)
        } else {
            self.fs_ops.is_file(&path)
        };
        present.then_some(path)
    }
}

/// Find the bundle directory.
///
/// Checks, in order: the explicit `--resources` value, the
/// [`RESOURCES_ENV`] variable, then locations relative to the running
/// executable (`<prefix>/share/devtools-setup/resources` for installed
/// binaries, the repository `resources/` for `target/<profile>/` builds).
/// Returns `None` when nothing is found.
#[must_use]
pub fn find_bundle_root(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(root) = explicit {
        return Some(root.to_path_buf());
    }

    if let Ok(root) = std::env::var(RESOURCES_ENV)
        && !root.is_empty()
    {
        return Some(PathBuf::from(root));
    }

    let exe = std::env::current_exe().ok()?;
    let parent = exe.parent()?;
    let candidates = [
        parent.join("../share/devtools-setup/resources"),
        parent.join("../../resources"),
        parent.join("../../../resources"),
    ];
    candidates
        .iter()
        .find(|c| c.join("configs").is_dir())
        .and_then(|c| dunce::canonicalize(c).ok())
}
