//! Developer-tooling installer.
//!
//! Distributes a bundle of shared lint/format configuration files and git
//! hook scripts into a consuming project, and generates a `Makefile` that
//! dispatches the common lint/format sub-commands.
//!
//! The public API is organised into four layers:
//!
//! - **[`locator`]**: resolve logical resource names to paths in the bundle
//! - **[`resources`]**: idempotent `check + apply` file primitives
//! - **[`tasks`]**: the named install steps, run in a fixed order
//! - **[`commands`]**: top-level subcommand orchestration (`install`, `settings`, …)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod locator;
pub mod logging;
pub mod operations;
pub mod project;
pub mod resources;
pub mod settings;
pub mod tasks;

/// Version string of this tool.
///
/// Uses the build-time `DEVTOOLS_SETUP_VERSION` (set from CI or
/// `git describe`) and falls back to the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("DEVTOOLS_SETUP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}
