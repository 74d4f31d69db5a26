//! Command: install resources into a project.
use std::sync::Arc;

use anyhow::Result;

use crate::cli::{GlobalOpts, InstallOpts};
use crate::locator::{self, BundleLocator};
use crate::logging::{Log, Logger};
use crate::operations::SystemFileSystemOps;
use crate::project;
use crate::settings::{SETTINGS_FILE_NAME, Settings};
use crate::tasks::{self, Context, Task};

/// External tools the generated `Makefile` drives, with their install hint.
const TOOLS: [(&str, &str); 2] = [
    ("swiftlint", "brew install swiftlint"),
    ("swiftformat", "brew install swiftformat"),
];

/// Run the install command.
///
/// # Errors
///
/// Returns [`SetupError::NotProjectRoot`](crate::error::SetupError::NotProjectRoot)
/// if the target has no project marker, or
/// [`SetupError::StepFailed`](crate::error::SetupError::StepFailed) if a step
/// fails.
pub fn run(global: &GlobalOpts, opts: &InstallOpts, log: &Arc<Logger>) -> Result<()> {
    log.info(&format!("devtools-setup {}", crate::version()));

    let root = super::resolve_project_root(global)?;
    project::ensure_project_root(&SystemFileSystemOps, &root)?;
    log.info(&format!("project: {}", root.display()));

    let bundle = locator::find_bundle_root(global.resources.as_deref());
    match &bundle {
        Some(dir) => log.debug(&format!("resource bundle: {}", dir.display())),
        None => log.warn(&format!(
            "resource bundle not found; pass --resources or set {}",
            locator::RESOURCES_ENV
        )),
    }

    let settings = Settings::load(&root.join(SETTINGS_FILE_NAME));
    let ctx = Context::new(
        root,
        Arc::new(BundleLocator::new(bundle)),
        settings,
        Arc::clone(log) as Arc<dyn Log>,
        global.dry_run,
    );

    let all_tasks = tasks::all_install_tasks(!opts.no_templates);
    super::run_tasks(select_tasks(&all_tasks, opts), &ctx, log)?;

    check_tools(log);
    if !global.dry_run {
        print_next_steps(log);
    }
    Ok(())
}

/// Apply `--skip` and `--only` to the step list without reordering it.
///
/// Both match a case-insensitive substring of the step name; `--only` wins
/// when both are given.
#[must_use]
pub fn select_tasks<'a>(tasks: &'a [Box<dyn Task>], opts: &InstallOpts) -> Vec<&'a dyn Task> {
    tasks
        .iter()
        .filter(|t| {
            let name = t.name().to_lowercase();
            if !opts.only.is_empty() {
                return opts.only.iter().any(|o| name.contains(&o.to_lowercase()));
            }
            if !opts.skip.is_empty() {
                return !opts.skip.iter().any(|s| name.contains(&s.to_lowercase()));
            }
            true
        })
        .map(AsRef::as_ref)
        .collect()
}

/// Warn about lint/format tools missing from `PATH`.
fn check_tools(log: &Logger) {
    for (tool, hint) in TOOLS {
        if which::which(tool).is_err() {
            log.warn(&format!("{tool} not found on PATH; install it with: {hint}"));
        }
    }
}

fn print_next_steps(log: &Logger) {
    log.stage("Next steps");
    log.info("make help     list the available targets");
    log.info("make lint     run SwiftLint");
    log.info("make format   check formatting");
    log.info("make fix      apply formatting fixes");
    log.info("commit something to try the pre-commit hook");
    log.info(&format!(
        "tune thresholds in {SETTINGS_FILE_NAME} (`devtools-setup settings init`)"
    ));
}
