//! Things the installer writes into a project, each with a state check
//! and an apply.
pub mod error;
pub mod file;
pub mod generated;
pub mod helpers;
pub mod tree;

use anyhow::Result;

/// What is at a resource's destination right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Nothing there yet.
    Missing,
    /// Byte-identical to what would be written (and `0755` where required).
    Correct,
    /// Something else is there.
    Incorrect {
        /// What differs, e.g. `"content differs"` or `"mode 644"`.
        current: String,
    },
    /// Cannot be written: the bundle source is gone, or the destination
    /// must not be touched.
    Invalid {
        /// Shown in the skip warning.
        reason: String,
    },
}

/// Outcome of [`Resource::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Written (created or overwritten).
    Applied,
    /// Left alone.
    Skipped {
        /// Shown in the skip warning.
        reason: String,
    },
}

/// Unified interface for things the installer writes into a project.
///
/// `apply` always writes (every install overwrites); `current_state` exists
/// so that dry runs can say what would change.
///
/// [`apply_resource`](crate::tasks::apply_resource) is the only caller that
/// matters: it turns `Invalid` into a skip warning and applies the rest.
pub trait Resource {
    /// Human-readable description, used in log lines.
    fn description(&self) -> String;

    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined due to I/O failures.
    fn current_state(&self) -> Result<ResourceState>;

    /// Write the resource into the target.
    ///
    /// # Errors
    ///
    /// Returns an error if any filesystem operation fails.  Nothing already
    /// written is rolled back.
    fn apply(&self) -> Result<ResourceChange>;
}
