//! Step 4: the template tree (optional).
use anyhow::{Context as _, Result};

use super::{ApplyVerb, Context, Task, TaskResult, TaskStats, apply_resource};
use crate::locator::ResourceKind;
use crate::resources::tree::CopiedTree;
use crate::resources::{Resource, ResourceState};

/// Destination of the template tree, relative to the project root.
pub const TEMPLATES_DIR: &str = "DevToolsTemplates";

/// Copy the bundled template tree into the project, once.
///
/// This is the only step that never overwrites: an existing destination is
/// left exactly as it is.
#[derive(Debug)]
pub struct InstallTemplates;

impl Task for InstallTemplates {
    fn name(&self) -> &'static str {
        "Install templates"
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let Some(source) = ctx.locator.resolve(ResourceKind::TemplatesDir) else {
            return Ok(TaskResult::Skipped(format!(
                "{} not found in resource bundle",
                ResourceKind::TemplatesDir
            )));
        };

        let resource = CopiedTree::new(source, ctx.root().join(TEMPLATES_DIR));
        if let ResourceState::Invalid { reason } = resource.current_state()? {
            return Ok(TaskResult::Skipped(reason));
        }

        let mut stats = TaskStats::new();
        stats += apply_resource(ctx, &resource, ApplyVerb::COPY)
            .with_context(|| format!("copying {TEMPLATES_DIR}/"))?;
        Ok(stats.finish(ctx))
    }
}
