//! The installer's [`Log`] implementation and run summary.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{Log, TaskEntry, TaskStatus};
use super::utils::log_file_path;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// Emits every line as a `tracing` event and keeps the per-step outcomes
/// for [`print_summary`](Self::print_summary).
///
/// Whatever subscriber [`init_subscriber`](super::init_subscriber) installed
/// decides where lines end up; this type only knows the log file path so
/// the summary can point at it.
#[derive(Debug)]
pub struct Logger {
    tasks: Mutex<Vec<TaskEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Logger for `command`, reporting `<cache>/devtools-setup/<command>.log`.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self::with_log_file(log_file_path(command))
    }

    /// Logger whose summary names `log_file` (or no file at all).
    #[must_use]
    pub const fn with_log_file(log_file: Option<PathBuf>) -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            log_file,
        }
    }

    /// Path the summary reports.
    #[cfg(test)]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Recorded steps, in the order they finished.
    #[must_use]
    pub fn task_entries(&self) -> Vec<TaskEntry> {
        self.tasks.lock().map_or_else(|_| Vec::new(), |t| t.clone())
    }

    /// Number of recorded steps with `status`.
    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks
            .lock()
            .map_or(0, |t| t.iter().filter(|e| e.status == status).count())
    }

    /// Number of failed steps.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.count(TaskStatus::Failed)
    }

    /// Whether any step failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Step failure.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Skip or degraded path.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Section header.
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Plain progress line.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Verbose-only on the console; always in the log file.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// What a dry run would have done.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Remember how step `name` ended.
    pub fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        let entry = TaskEntry {
            name: name.to_string(),
            status,
            message: message.map(str::to_string),
        };
        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.push(entry);
        }
    }

    /// Print one line per recorded step, the totals, and the log file path.
    ///
    /// Does nothing when no step was recorded.
    #[allow(clippy::print_stdout)]
    pub fn print_summary(&self) {
        let entries = self.task_entries();
        if entries.is_empty() {
            return;
        }

        println!();
        self.stage("Summary");
        for entry in &entries {
            let detail = entry
                .message
                .as_deref()
                .map_or_else(String::new, |m| format!(" ({m})"));
            self.info(&format!(
                "{}{} {}{detail}{RESET}",
                entry.status.color(),
                entry.status.icon(),
                entry.name
            ));
        }

        println!();
        let totals: Vec<String> = TaskStatus::ALL
            .iter()
            .map(|&status| {
                let n = entries.iter().filter(|e| e.status == status).count();
                format!("{}{n} {}{RESET}", status.color(), status.label())
            })
            .collect();
        self.info(&format!("{} steps: {}", entries.len(), totals.join(", ")));

        if let Some(path) = &self.log_file {
            self.info(&format!("{DIM}log: {}{RESET}", path.display()));
        }
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        Self::stage(self, msg);
    }
    fn info(&self, msg: &str) {
        Self::info(self, msg);
    }
    fn debug(&self, msg: &str) {
        Self::debug(self, msg);
    }
    fn warn(&self, msg: &str) {
        Self::warn(self, msg);
    }
    fn error(&self, msg: &str) {
        Self::error(self, msg);
    }
    fn dry_run(&self, msg: &str) {
        Self::dry_run(self, msg);
    }
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        Self::record_task(self, name, status, message);
    }
}
