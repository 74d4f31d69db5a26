//! Typed error variants for resource operations.
//!
//! This module provides [`ResourceError`], a structured error type for
//! resource check and apply operations.  Every variant names the path it
//! concerns; callers convert to [`anyhow::Error`] via `?` and add the step
//! name as context.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that arise from resource checks and apply operations.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The source of a copy does not exist.
    #[error("source not found: {}", path.display())]
    SourceMissing {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// The source exists but has the wrong shape (e.g. a directory where a
    /// file is expected).
    #[error("invalid source {}: {reason}", path.display())]
    InvalidSource {
        /// Offending source path.
        path: PathBuf,
        /// Human-readable explanation.
        reason: String,
    },

    /// A filesystem call failed.
    #[error("{action} {}: {source}", path.display())]
    Io {
        /// What was being done (e.g. `"copying to"`, `"setting permissions on"`).
        action: &'static str,
        /// Path the action was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ResourceError {
    /// Build a closure mapping an [`std::io::Error`] to [`ResourceError::Io`].
    pub(crate) fn io(action: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}
