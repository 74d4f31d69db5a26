//! Directory tree copied into the project once.
use anyhow::Result;
use std::path::PathBuf;

use super::helpers::fs::copy_dir_recursive;
use super::{Resource, ResourceChange, ResourceState};

/// A bundled directory tree copied to a destination that must not exist yet.
///
/// An existing destination is never merged into or overwritten.
#[derive(Debug, Clone)]
pub struct CopiedTree {
    /// Source directory inside the bundle.
    pub source: PathBuf,
    /// Destination directory inside the project.
    pub target: PathBuf,
}

impl CopiedTree {
    /// Create a tree copy resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }

    fn exists_reason(&self) -> String {
        format!("{}/ already exists", self.description())
    }
}

impl Resource for CopiedTree {
    fn description(&self) -> String {
        self.target.file_name().map_or_else(
            || self.target.display().to_string(),
            |n| n.to_string_lossy().to_string(),
        )
    }

    fn current_state(&self) -> Result<ResourceState> {
        if self.target.symlink_metadata().is_ok() {
            return Ok(ResourceState::Invalid {
                reason: self.exists_reason(),
            });
        }
        if !self.source.is_dir() {
            return Ok(ResourceState::Invalid {
                reason: format!("source directory does not exist: {}", self.source.display()),
            });
        }
        Ok(ResourceState::Missing)
    }

    fn apply(&self) -> Result<ResourceChange> {
        if self.target.symlink_metadata().is_ok() {
            return Ok(ResourceChange::Skipped {
                reason: self.exists_reason(),
            });
        }
        copy_dir_recursive(&self.source, &self.target)?;
        Ok(ResourceChange::Applied)
    }
}
