//! Project-root precondition.
//!
//! The installer only runs against a directory that looks like a project:
//! it holds a `Package.swift` manifest or an `*.xcodeproj` bundle.
use std::path::Path;

use crate::error::SetupError;
use crate::operations::FileSystemOps;

/// Project descriptor file name.
pub const PROJECT_MARKER_FILE: &str = "Package.swift";

/// Suffix of a project directory entry.
pub const PROJECT_DIR_SUFFIX: &str = ".xcodeproj";

/// Returns `true` if `dir` carries a project marker.
///
/// A directory that cannot be listed is treated as having no
/// `*.xcodeproj` entry.
#[must_use]
pub fn is_project_root(fs: &dyn FileSystemOps, dir: &Path) -> bool {
    if fs.is_file(&dir.join(PROJECT_MARKER_FILE)) {
        return true;
    }

    match fs.read_dir(dir) {
        Ok(entries) => entries.iter().any(|entry| {
            entry
                .file_name()
                .is_some_and(|name| name.to_string_lossy().ends_with(PROJECT_DIR_SUFFIX))
        }),
        Err(e) => {
            tracing::debug!("cannot list {}: {e:#}", dir.display());
            false
        }
    }
}

/// Fail with [`SetupError::NotProjectRoot`] unless `dir` is a project root.
///
/// # Errors
///
/// Returns [`SetupError::NotProjectRoot`] when no marker is present.
pub fn ensure_project_root(fs: &dyn FileSystemOps, dir: &Path) -> Result<(), SetupError> {
    if is_project_root(fs, dir) {
        Ok(())
    } else {
        Err(SetupError::NotProjectRoot {
            path: dir.display().to_string(),
        })
    }
}
