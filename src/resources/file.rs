//! Bundled file copied into the project (configs and hook scripts).
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::helpers::fs::{EXECUTABLE_MODE, copy_resource, make_executable, permission_bits};
use super::{Resource, ResourceChange, ResourceState};

/// A file copied from the bundle to a fixed destination, optionally marked
/// executable.
#[derive(Debug, Clone)]
pub struct InstalledFile {
    /// Source file inside the bundle.
    pub source: PathBuf,
    /// Destination inside the project.
    pub target: PathBuf,
    /// Whether the destination gets mode `0755`.
    pub executable: bool,
}

impl InstalledFile {
    /// A plain file copy.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self {
            source,
            target,
            executable: false,
        }
    }

    /// A copy whose destination is made executable (git hooks).
    #[must_use]
    pub const fn executable(source: PathBuf, target: PathBuf) -> Self {
        Self {
            source,
            target,
            executable: true,
        }
    }
}

impl Resource for InstalledFile {
    fn description(&self) -> String {
        self.target.file_name().map_or_else(
            || self.target.display().to_string(),
            |n| n.to_string_lossy().to_string(),
        )
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.source.is_file() {
            return Ok(ResourceState::Invalid {
                reason: format!("source does not exist: {}", self.source.display()),
            });
        }

        if self.target.symlink_metadata().is_err() {
            return Ok(ResourceState::Missing);
        }

        // Detect broken symlinks at the target location
        if !self.target.exists() {
            return Ok(ResourceState::Incorrect {
                current: "broken symlink".to_string(),
            });
        }

        if self.target.is_dir() {
            return Ok(ResourceState::Incorrect {
                current: "directory".to_string(),
            });
        }

        let src_content = std::fs::read(&self.source)
            .with_context(|| format!("read source: {}", self.source.display()))?;
        // Whatever cannot be read is overwritten by apply.
        let Ok(dst_content) = std::fs::read(&self.target) else {
            return Ok(ResourceState::Incorrect {
                current: "unreadable".to_string(),
            });
        };
        if src_content != dst_content {
            return Ok(ResourceState::Incorrect {
                current: "content differs".to_string(),
            });
        }

        if self.executable
            && let Some(mode) = permission_bits(&self.target)?
            && mode != EXECUTABLE_MODE
        {
            return Ok(ResourceState::Incorrect {
                current: format!("mode {mode:o}"),
            });
        }

        Ok(ResourceState::Correct)
    }

    fn apply(&self) -> Result<ResourceChange> {
        copy_resource(&self.source, &self.target)?;
        if self.executable {
            make_executable(&self.target)?;
        }
        Ok(ResourceChange::Applied)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn description_returns_filename() {
        let resource = InstalledFile::new(
            PathBuf::from("/bundle/configs/swiftlint.yml"),
            PathBuf::from("/app/.swiftlint.yml"),
        );
        assert_eq!(resource.description(), ".swiftlint.yml");
    }

    #[test]
    fn current_state_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let resource =
            InstalledFile::new(dir.path().join("nonexistent"), dir.path().join("target"));
        assert!(matches!(
            resource.current_state().unwrap(),
            ResourceState::Invalid { .. }
        ));
    }

    #[test]
    fn current_state_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("hook");
        std::fs::write(&src, "#!/bin/sh\necho hi").unwrap();
        let resource = InstalledFile::new(src, dir.path().join("target"));
        assert_eq!(resource.current_state().unwrap(), ResourceState::Missing);
    }

    #[test]
    fn current_state_correct_and_incorrect() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("config");
        let dst = dir.path().join("target");
        std::fs::write(&src, "indent: 4").unwrap();
        std::fs::write(&dst, "indent: 4").unwrap();
        let resource = InstalledFile::new(src.clone(), dst.clone());
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);

        std::fs::write(&dst, "indent: 2").unwrap();
        assert_eq!(
            resource.current_state().unwrap(),
            ResourceState::Incorrect {
                current: "content differs".to_string()
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn executable_with_wrong_mode_is_incorrect() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("pre-commit");
        let dst = dir.path().join("hooks/pre-commit");
        std::fs::write(&src, "#!/bin/sh\n").unwrap();
        std::fs::create_dir(dir.path().join("hooks")).unwrap();
        std::fs::write(&dst, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&dst, std::fs::Permissions::from_mode(0o644)).unwrap();

        let resource = InstalledFile::executable(src, dst);
        assert_eq!(
            resource.current_state().unwrap(),
            ResourceState::Incorrect {
                current: "mode 644".to_string()
            }
        );
    }

    #[test]
    fn apply_copies_file_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("swiftformat");
        let dst = dir.path().join("subdir").join(".swiftformat");
        std::fs::write(&src, "--indent 4").unwrap();

        let resource = InstalledFile::new(src, dst.clone());
        assert_eq!(resource.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "--indent 4");
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);
    }

    #[cfg(unix)]
    #[test]
    fn apply_executable_sets_0755() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("pre-push");
        std::fs::write(&src, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&src, std::fs::Permissions::from_mode(0o600)).unwrap();
        let dst = dir.path().join(".git/hooks/pre-push");

        let resource = InstalledFile::executable(src, dst.clone());
        resource.apply().unwrap();
        assert_eq!(permission_bits(&dst).unwrap(), Some(0o755));
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_directory_is_replaced_by_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("swiftlint.yml");
        std::fs::write(&src, "disabled_rules: []\n").unwrap();
        let elsewhere = dir.path().join("elsewhere");
        std::fs::create_dir(&elsewhere).unwrap();
        let dst = dir.path().join(".swiftlint.yml");
        std::os::unix::fs::symlink(&elsewhere, &dst).unwrap();

        let resource = InstalledFile::new(src, dst.clone());
        assert_eq!(
            resource.current_state().unwrap(),
            ResourceState::Incorrect {
                current: "directory".to_string()
            }
        );
        resource.apply().unwrap();
        assert!(!dst.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "disabled_rules: []\n");
        assert!(elsewhere.is_dir());
    }

    #[test]
    fn apply_with_missing_source_fails_without_touching_target() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("target");
        std::fs::write(&dst, "keep me").unwrap();

        let resource = InstalledFile::new(dir.path().join("gone"), dst.clone());
        assert!(resource.apply().is_err());
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "keep me");
    }
}
