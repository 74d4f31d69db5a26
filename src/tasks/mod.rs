//! Named install steps that orchestrate resource changes.
//!
//! Steps run strictly in the order returned by [`all_install_tasks`]; there
//! is no dependency graph and no parallelism.
pub mod configs;
mod context;
pub mod dispatcher;
pub mod hooks;
pub mod templates;

pub use context::Context;

use anyhow::Result;

use crate::logging::TaskStatus;
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Result of a single step execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Step completed successfully.
    Ok,
    /// Step was skipped with a reason.
    Skipped(String),
    /// Step ran in dry-run mode.
    DryRun,
}

/// Counters for resources a step has handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of resources written (or that would be written).
    pub changed: u32,
    /// Number of resources skipped because they were missing or blocked.
    pub skipped: u32,
}

impl TaskStats {
    /// Create a new empty stats counter.
    ///
    /// # Examples
    ///
    /// ```
    /// use devtools_setup::tasks::TaskStats;
    ///
    /// let stats = TaskStats::new();
    /// assert_eq!(stats.changed, 0);
    /// assert_eq!(stats.skipped, 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Format the summary string (e.g. "2 changed, 1 skipped").
    ///
    /// # Examples
    ///
    /// ```
    /// use devtools_setup::tasks::TaskStats;
    ///
    /// let stats = TaskStats { changed: 2, skipped: 0 };
    /// assert_eq!(stats.summary(false), "2 changed");
    /// assert_eq!(stats.summary(true), "2 would change");
    /// ```
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> String {
        let verb = if dry_run { "would change" } else { "changed" };
        if self.skipped > 0 {
            format!("{} {verb}, {} skipped", self.changed, self.skipped)
        } else {
            format!("{} {verb}", self.changed)
        }
    }

    /// Log the summary and return the appropriate `TaskResult`.
    #[must_use]
    pub fn finish(self, ctx: &Context) -> TaskResult {
        ctx.log.info(&self.summary(ctx.dry_run));
        if ctx.dry_run {
            TaskResult::DryRun
        } else {
            TaskResult::Ok
        }
    }
}

impl std::ops::AddAssign for TaskStats {
    fn add_assign(&mut self, other: Self) {
        self.changed += other.changed;
        self.skipped += other.skipped;
    }
}

/// Wording used when reporting a resource write.
#[derive(Debug, Clone, Copy)]
pub struct ApplyVerb {
    /// Imperative form, used in dry-run lines ("would install").
    pub present: &'static str,
    /// Past tense, used in confirmation lines ("installed").
    pub past: &'static str,
}

impl ApplyVerb {
    /// Copy a bundled file into the project.
    pub const INSTALL: Self = Self {
        present: "install",
        past: "installed",
    };
    /// Generate a file from the installer itself.
    pub const WRITE: Self = Self {
        present: "write",
        past: "wrote",
    };
    /// Copy a whole directory tree.
    pub const COPY: Self = Self {
        present: "copy",
        past: "copied",
    };
}

/// Write one resource, honouring dry-run mode.
///
/// Every install overwrites, so resources that are already correct are
/// written again. Invalid resources (bundle source gone, or a template
/// tree already in place) are skipped with a warning; anything else that
/// cannot be written is an error.
///
/// # Errors
///
/// Returns an error if the state check or the write fails.
pub fn apply_resource(ctx: &Context, resource: &dyn Resource, verb: ApplyVerb) -> Result<TaskStats> {
    let desc = resource.description();
    let mut delta = TaskStats::new();

    let state = resource.current_state()?;
    ctx.log.debug(&format!("{desc}: {state:?}"));

    if let ResourceState::Invalid { reason } = &state {
        ctx.log.warn(&format!("skipping {desc}: {reason}"));
        delta.skipped += 1;
        return Ok(delta);
    }

    if ctx.dry_run {
        let msg = match state {
            ResourceState::Missing => format!("would {} {desc}", verb.present),
            _ => format!("would overwrite {desc}"),
        };
        ctx.log.dry_run(&msg);
        delta.changed += 1;
        return Ok(delta);
    }

    match resource.apply()? {
        ResourceChange::Applied => {
            ctx.log.info(&format!("{} {desc}", verb.past));
            delta.changed += 1;
        }
        ResourceChange::Skipped { reason } => {
            ctx.log.warn(&format!("skipping {desc}: {reason}"));
            delta.skipped += 1;
        }
    }
    Ok(delta)
}

/// A named install step.
pub trait Task: Send + Sync {
    /// Human-readable step name.
    fn name(&self) -> &str;

    /// Whether the project settings enable this step.
    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    /// Execute the step.
    ///
    /// # Errors
    ///
    /// Returns an error if a copy, permission change or write fails.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// The install steps in execution order.
///
/// `include_templates` controls whether the template tree copy runs.
#[must_use]
pub fn all_install_tasks(include_templates: bool) -> Vec<Box<dyn Task>> {
    let mut tasks: Vec<Box<dyn Task>> = vec![
        Box::new(configs::InstallConfigs),
        Box::new(hooks::InstallGitHooks),
        Box::new(dispatcher::GenerateDispatcher),
    ];
    if include_templates {
        tasks.push(Box::new(templates::InstallTemplates));
    }
    tasks
}

/// Execute a step, recording the result in the logger.
///
/// Returns the recorded status.
///
/// # Errors
///
/// Returns the step's error after it has been logged and recorded as failed.
pub fn execute(task: &dyn Task, ctx: &Context) -> Result<TaskStatus> {
    if !task.should_run(ctx) {
        ctx.log
            .warn(&format!("skipping {}: disabled in project settings", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return Ok(TaskStatus::NotApplicable);
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
            Ok(TaskStatus::Ok)
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.warn(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
            Ok(TaskStatus::Skipped)
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
            Ok(TaskStatus::DryRun)
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
            Err(e)
        }
    }
}
