//! Domain-specific error types for the installer.
//!
//! Internal modules return typed errors (e.g., [`SettingsError`],
//! [`ResourceError`](crate::resources::error::ResourceError)) while command
//! handlers at the CLI boundary convert them to [`anyhow::Error`] via the
//! standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! SetupError
//! ├── NotProjectRoot          precondition failed, fatal to the run
//! ├── StepFailed              an install step aborted; later steps not run
//! └── Settings(SettingsError) settings file could not be written
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the installer.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The target directory carries no project marker.
    #[error(
        "{path} is not a project root: run this command from the root of your project (Package.swift or *.xcodeproj)"
    )]
    NotProjectRoot {
        /// Directory that was checked.
        path: String,
    },

    /// An install step failed; the remaining steps were not attempted.
    #[error("step '{step}' failed: {reason}")]
    StepFailed {
        /// Name of the step that failed.
        step: String,
        /// Full error chain of the failure.
        reason: String,
    },

    /// Settings persistence error.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Errors that arise from reading or writing the settings file.
///
/// Only [`SettingsError::Io`] and [`SettingsError::Serialize`] ever reach a
/// caller; [`SettingsError::Parse`] is logged and replaced by the default
/// settings on load.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    #[error("IO error on settings file {}: {source}", path.display())]
    Io {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings value could not be encoded as JSON.
    #[error("cannot encode settings: {source}")]
    Serialize {
        /// Underlying serializer error.
        source: serde_json::Error,
    },

    /// The settings file contents are not valid settings JSON.
    #[error("invalid settings file {}: {source}", path.display())]
    Parse {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_project_root_display() {
        let e = SetupError::NotProjectRoot {
            path: "/tmp/empty".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/empty"));
        assert!(msg.contains("Package.swift"));
    }

    #[test]
    fn step_failed_display() {
        let e = SetupError::StepFailed {
            step: "Install git hooks".to_string(),
            reason: "copying pre-commit: permission denied".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "step 'Install git hooks' failed: copying pre-commit: permission denied"
        );
    }

    #[test]
    fn settings_io_display_and_source() {
        use std::error::Error as StdError;
        let e = SettingsError::Io {
            path: PathBuf::from("/p/.devtools-setup.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.to_string().contains("/p/.devtools-setup.json"));
        assert!(e.source().is_some());
    }

    #[test]
    fn settings_parse_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = SettingsError::Parse {
            path: PathBuf::from("settings.json"),
            source,
        };
        assert!(e.to_string().starts_with("invalid settings file settings.json"));
    }

    #[test]
    fn setup_error_from_settings_error() {
        let e: SetupError = SettingsError::Io {
            path: PathBuf::from("x"),
            source: io::Error::other("boom"),
        }
        .into();
        assert!(e.to_string().contains("Settings error"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<SetupError>();
        assert_send_sync::<SettingsError>();
    }

    #[test]
    fn setup_error_converts_to_anyhow() {
        let e = SetupError::NotProjectRoot {
            path: "x".to_string(),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }
}
