//! File whose contents are produced by the installer itself.
use anyhow::Result;
use std::path::PathBuf;

use super::helpers::fs::write_atomic;
use super::{Resource, ResourceChange, ResourceState};

/// A file written from an in-memory string, replacing whatever is there.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Destination inside the project.
    pub target: PathBuf,
    /// Full file contents.
    pub content: String,
}

impl GeneratedFile {
    /// Create a generated file resource.
    #[must_use]
    pub const fn new(target: PathBuf, content: String) -> Self {
        Self { target, content }
    }
}

impl Resource for GeneratedFile {
    fn description(&self) -> String {
        self.target.file_name().map_or_else(
            || self.target.display().to_string(),
            |n| n.to_string_lossy().to_string(),
        )
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.target.exists() {
            return Ok(ResourceState::Missing);
        }
        // write_atomic cannot replace a directory; apply fails naming it.
        if self.target.is_dir() {
            return Ok(ResourceState::Incorrect {
                current: "directory".to_string(),
            });
        }

        let current = match std::fs::read(&self.target) {
            Ok(bytes) if bytes == self.content.as_bytes() => return Ok(ResourceState::Correct),
            Ok(_) => "content differs",
            Err(_) => "unreadable",
        };
        Ok(ResourceState::Incorrect {
            current: current.to_string(),
        })
    }

    fn apply(&self) -> Result<ResourceChange> {
        write_atomic(&self.target, self.content.as_bytes())?;
        Ok(ResourceChange::Applied)
    }
}
