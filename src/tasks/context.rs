use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::locator::ResourceLocator;
use crate::logging::Log;
use crate::operations::{FileSystemOps, SystemFileSystemOps};
use crate::settings::Settings;

/// Shared context for step execution.
pub struct Context {
    /// Root of the project being set up.
    pub project_root: PathBuf,
    /// Resolves bundled resources.
    pub locator: Arc<dyn ResourceLocator>,
    /// Effective project settings (loaded or default).
    pub settings: Settings,
    /// Logger for output and step recording.
    pub log: Arc<dyn Log>,
    /// Whether to perform a dry run (report changes without writing).
    pub dry_run: bool,
    /// Filesystem query abstraction (injectable for testing).
    pub fs_ops: Arc<dyn FileSystemOps>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("project_root", &self.project_root)
            .field("locator", &"<dyn ResourceLocator>")
            .field("settings", &self.settings)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("fs_ops", &self.fs_ops)
            .finish()
    }
}

impl Context {
    /// Create a context that queries the real filesystem.
    #[must_use]
    pub fn new(
        project_root: PathBuf,
        locator: Arc<dyn ResourceLocator>,
        settings: Settings,
        log: Arc<dyn Log>,
        dry_run: bool,
    ) -> Self {
        Self {
            project_root,
            locator,
            settings,
            log,
            dry_run,
            fs_ops: Arc::new(SystemFileSystemOps),
        }
    }

    /// Root of the project being set up.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.project_root
    }

    /// Git hooks directory of the project.
    #[must_use]
    pub fn hooks_dir(&self) -> PathBuf {
        self.project_root.join(".git").join("hooks")
    }

    /// Create a copy of this context with a different [`FileSystemOps`]
    /// implementation.
    ///
    /// Used in tests to inject a
    /// [`MockFileSystemOps`](crate::operations::MockFileSystemOps).
    #[must_use]
    pub fn with_fs_ops(self, fs_ops: Arc<dyn FileSystemOps>) -> Self {
        Self { fs_ops, ..self }
    }
}
