//! Subcommand handlers invoked by the binary.

pub mod completions;
pub mod install;
pub mod settings;
pub mod version;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::error::SetupError;
use crate::logging::Logger;
use crate::tasks::{self, Context, Task};

/// Resolve the project directory from `--project` or the current directory.
///
/// # Errors
///
/// Returns an error if the directory does not exist or the current
/// directory cannot be read.
pub fn resolve_project_root(global: &GlobalOpts) -> Result<PathBuf> {
    let dir = match &global.project {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("reading current directory")?,
    };
    dunce::canonicalize(&dir)
        .with_context(|| format!("resolving project directory {}", dir.display()))
}

/// Execute the steps in order, stopping at the first failure, then print the
/// summary.
///
/// Steps that already completed are not rolled back.
///
/// # Errors
///
/// Returns [`SetupError::StepFailed`] naming the first step that failed.
pub fn run_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a dyn Task>,
    ctx: &Context,
    log: &Logger,
) -> Result<(), SetupError> {
    for task in tasks {
        if let Err(e) = tasks::execute(task, ctx) {
            log.print_summary();
            return Err(SetupError::StepFailed {
                step: task.name().to_string(),
                reason: format!("{e:#}"),
            });
        }
    }

    log.print_summary();
    Ok(())
}
