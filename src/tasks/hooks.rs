//! Step 2: git hook scripts.
use anyhow::{Context as _, Result};

use super::{ApplyVerb, Context, Task, TaskResult, TaskStats, apply_resource};
use crate::locator::ResourceKind;
use crate::resources::file::InstalledFile;

/// Hook scripts the bundle may ship, in install order.
pub const HOOK_NAMES: [&str; 2] = ["pre-commit", "pre-push"];

/// Install the bundled hook scripts into `.git/hooks/` as executables.
///
/// Requires `.git/hooks` to exist already; the project may not be a
/// repository yet, which is a warning and not an error.
#[derive(Debug)]
pub struct InstallGitHooks;

impl Task for InstallGitHooks {
    fn name(&self) -> &'static str {
        "Install git hooks"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.settings.enable_pre_commit_hooks
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let hooks_dir = ctx.hooks_dir();
        if !ctx.fs_ops.is_dir(&hooks_dir) {
            return Ok(TaskResult::Skipped(
                ".git/hooks not found (not a git repository?)".to_string(),
            ));
        }

        let Some(scripts_dir) = ctx.locator.resolve(ResourceKind::ScriptsDir) else {
            return Ok(TaskResult::Skipped(format!(
                "{} not found in resource bundle",
                ResourceKind::ScriptsDir
            )));
        };

        let mut stats = TaskStats::new();
        for hook in HOOK_NAMES {
            let source = scripts_dir.join(hook);
            if !ctx.fs_ops.is_file(&source) {
                ctx.log
                    .warn(&format!("hook script {hook} not found in resource bundle, skipping"));
                stats.skipped += 1;
                continue;
            }
            let resource = InstalledFile::executable(source, hooks_dir.join(hook));
            stats += apply_resource(ctx, &resource, ApplyVerb::INSTALL)
                .with_context(|| format!("installing hook {hook}"))?;
        }

        if stats.changed == 0 {
            return Ok(TaskResult::Skipped("no hook scripts installed".to_string()));
        }
        Ok(stats.finish(ctx))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::TaskStatus;
    use crate::operations::MockFileSystemOps;
    use crate::tasks::execute;
    use crate::tasks::test_helpers::{RecordingLog, bundle_locator, empty_locator};
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    fn write_scripts(bundle: &Path, hooks: &[&str]) {
        let scripts = bundle.join("scripts");
        std::fs::create_dir_all(&scripts).unwrap();
        for hook in hooks {
            std::fs::write(scripts.join(hook), "#!/bin/sh\nexit 0\n").unwrap();
        }
    }

    #[test]
    fn missing_hooks_dir_skips_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("bundle");
        let project = dir.path().join("app");
        write_scripts(&bundle, &HOOK_NAMES);
        std::fs::create_dir(&project).unwrap();

        let (ctx, log) = RecordingLog::context(project.clone(), bundle_locator(bundle));
        let status = execute(&InstallGitHooks, &ctx).unwrap();

        assert_eq!(status, TaskStatus::Skipped);
        assert!(!project.join(".git").exists());
        assert_eq!(
            log.at("warn"),
            ["skipped: .git/hooks not found (not a git repository?)"]
        );
    }

    #[test]
    fn missing_scripts_dir_skips() {
        let fs = MockFileSystemOps::new().with_dir("/app/.git/hooks");
        let (ctx, _log) = RecordingLog::context(PathBuf::from("/app"), empty_locator());
        let ctx = ctx.with_fs_ops(Arc::new(fs));
        assert_eq!(
            InstallGitHooks.run(&ctx).unwrap(),
            TaskResult::Skipped("scripts directory not found in resource bundle".to_string())
        );
    }

    #[test]
    fn disabled_in_settings() {
        let (mut ctx, _log) = RecordingLog::context(PathBuf::from("/app"), empty_locator());
        assert!(InstallGitHooks.should_run(&ctx));
        ctx.settings.enable_pre_commit_hooks = false;
        assert!(!InstallGitHooks.should_run(&ctx));
    }

    #[cfg(unix)]
    #[test]
    fn installs_hooks_as_executable() {
        use crate::resources::helpers::fs::permission_bits;

        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("bundle");
        let project = dir.path().join("app");
        write_scripts(&bundle, &HOOK_NAMES);
        std::fs::create_dir_all(project.join(".git/hooks")).unwrap();

        let (ctx, log) = RecordingLog::context(project.clone(), bundle_locator(bundle));
        assert_eq!(InstallGitHooks.run(&ctx).unwrap(), TaskResult::Ok);

        for hook in HOOK_NAMES {
            let installed = project.join(".git/hooks").join(hook);
            assert_eq!(permission_bits(&installed).unwrap(), Some(0o755));
            assert_eq!(
                std::fs::read_to_string(&installed).unwrap(),
                "#!/bin/sh\nexit 0\n"
            );
        }
        assert_eq!(
            log.at("info"),
            ["installed pre-commit", "installed pre-push", "2 changed"]
        );
    }

    #[test]
    fn missing_single_hook_is_skipped_independently() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("bundle");
        let project = dir.path().join("app");
        write_scripts(&bundle, &["pre-push"]);
        std::fs::create_dir_all(project.join(".git/hooks")).unwrap();

        let (ctx, log) = RecordingLog::context(project.clone(), bundle_locator(bundle));
        assert_eq!(InstallGitHooks.run(&ctx).unwrap(), TaskResult::Ok);

        assert!(!project.join(".git/hooks/pre-commit").exists());
        assert!(project.join(".git/hooks/pre-push").exists());
        assert_eq!(
            log.at("warn"),
            ["hook script pre-commit not found in resource bundle, skipping"]
        );
    }
}
