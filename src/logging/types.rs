//! Step records and the [`Log`] trait that install steps write through.

/// One line of the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    /// Step name as shown in the summary.
    pub name: String,
    /// How the step ended.
    pub status: TaskStatus,
    /// Skip reason or error chain, when there is one.
    pub message: Option<String>,
}

/// How a step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Wrote everything it had to write.
    Ok,
    /// Turned off by the project settings.
    NotApplicable,
    /// Did not run because a precondition or bundle resource was missing.
    Skipped,
    /// Reported what it would write without writing.
    DryRun,
    /// Stopped with an error; later steps did not run.
    Failed,
}

impl TaskStatus {
    /// Every status, in the order the summary totals list them.
    pub const ALL: [Self; 5] = [
        Self::Ok,
        Self::NotApplicable,
        Self::Skipped,
        Self::DryRun,
        Self::Failed,
    ];

    /// Summary glyph.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::NotApplicable => "·",
            Self::Skipped => "○",
            Self::DryRun => "~",
            Self::Failed => "✗",
        }
    }

    /// Word used in the summary totals line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotApplicable => "n/a",
            Self::Skipped => "skipped",
            Self::DryRun => "dry-run",
            Self::Failed => "failed",
        }
    }

    /// SGR escape the summary paints this status with.
    pub(super) const fn color(self) -> &'static str {
        match self {
            Self::Ok => "\x1b[32m",
            Self::NotApplicable => "\x1b[2m",
            Self::Skipped => "\x1b[33m",
            Self::DryRun => "\x1b[37m",
            Self::Failed => "\x1b[31m",
        }
    }
}

/// Sink for step output.
///
/// [`Logger`](super::Logger) forwards to `tracing`; unit tests swap in a
/// recorder so they can assert on exact lines.
pub trait Log: Send + Sync {
    /// Section header, printed once per step.
    fn stage(&self, msg: &str);
    /// Confirmation of something that was written.
    fn info(&self, msg: &str);
    /// Detail that only shows with `--verbose` (always kept in the log file).
    fn debug(&self, msg: &str);
    /// Something was skipped.
    fn warn(&self, msg: &str);
    /// A step failed.
    fn error(&self, msg: &str);
    /// What a dry run would have written.
    fn dry_run(&self, msg: &str);
    /// Remember how a step ended, for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}
