//! Step 1: lint and format configs.
use anyhow::{Context as _, Result};

use super::{ApplyVerb, Context, Task, TaskResult, TaskStats, apply_resource};
use crate::locator::ResourceKind;
use crate::resources::file::InstalledFile;

/// Destination of the lint config, relative to the project root.
pub const LINT_CONFIG_FILE: &str = ".swiftlint.yml";

/// Destination of the format config, relative to the project root.
pub const FORMAT_CONFIG_FILE: &str = ".swiftformat";

/// Config resources and their fixed destinations, in install order.
const CONFIGS: [(ResourceKind, &str); 2] = [
    (ResourceKind::LintConfig, LINT_CONFIG_FILE),
    (ResourceKind::FormatConfig, FORMAT_CONFIG_FILE),
];

/// Copy the lint and format configs to the project root.
#[derive(Debug)]
pub struct InstallConfigs;

impl Task for InstallConfigs {
    fn name(&self) -> &'static str {
        "Install configs"
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let mut stats = TaskStats::new();
        for (kind, file_name) in CONFIGS {
            let Some(source) = ctx.locator.resolve(kind) else {
                ctx.log
                    .warn(&format!("{kind} not found in resource bundle, skipping"));
                stats.skipped += 1;
                continue;
            };
            let resource = InstalledFile::new(source, ctx.root().join(file_name));
            stats += apply_resource(ctx, &resource, ApplyVerb::INSTALL)
                .with_context(|| format!("installing {file_name}"))?;
        }

        if stats.changed == 0 {
            return Ok(TaskResult::Skipped(
                "no config files installed".to_string(),
            ));
        }
        Ok(stats.finish(ctx))
    }
}
