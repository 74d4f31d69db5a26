//! Command: create or inspect the project settings file.
use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, bail};

use crate::cli::{GlobalOpts, SettingsAction, SettingsOpts};
use crate::error::SetupError;
use crate::logging::Logger;
use crate::settings::{SETTINGS_FILE_NAME, Settings};

/// Run the settings command.
///
/// # Errors
///
/// Returns an error if the project directory cannot be resolved or the
/// settings file cannot be written.
#[allow(clippy::print_stdout)]
pub fn run(global: &GlobalOpts, opts: &SettingsOpts, log: &Arc<Logger>) -> Result<()> {
    let root = super::resolve_project_root(global)?;
    let path = root.join(SETTINGS_FILE_NAME);
    match opts.action {
        SettingsAction::Init { force } => init(&path, force, global.dry_run, log),
        SettingsAction::Show => {
            println!("{}", render(&path)?);
            Ok(())
        }
    }
}

/// Write the default settings to `path`.
///
/// # Errors
///
/// Returns an error if `path` exists and `force` is not set, or
/// [`SetupError::Settings`] if writing fails.
pub fn init(path: &Path, force: bool, dry_run: bool, log: &Logger) -> Result<()> {
    let exists = path.exists();
    if exists && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if dry_run {
        let verb = if exists { "overwrite" } else { "write" };
        log.dry_run(&format!("would {verb} {}", path.display()));
        return Ok(());
    }

    Settings::default().save(path).map_err(SetupError::from)?;
    log.info(&format!("wrote {}", path.display()));
    Ok(())
}

/// Effective settings at `path` as pretty JSON (defaults when missing or
/// unreadable).
///
/// # Errors
///
/// Returns an error if the settings cannot be encoded.
pub fn render(path: &Path) -> Result<String> {
    Ok(Settings::load(path).to_json()?)
}
