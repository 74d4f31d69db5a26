//! Per-project settings record.
//!
//! A flat value object persisted as JSON in the project root.  Loading never
//! fails: a missing or unreadable file yields [`Settings::default`] and the
//! discarded error is logged.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// File name of the settings file in the project root.
pub const SETTINGS_FILE_NAME: &str = ".devtools-setup.json";

/// Lint thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintRules {
    /// Violation count at which lint reports a warning.
    pub warning_threshold: i64,
    /// Violation count at which lint reports an error.
    pub error_threshold: i64,
    /// Type body length (lines) that triggers a warning.
    pub typ_body_length_warning: i64,
    /// Type body length (lines) that triggers an error.
    pub typ_body_length_error: i64,
}

impl Default for LintRules {
    fn default() -> Self {
        Self {
            warning_threshold: 10,
            error_threshold: 50,
            typ_body_length_warning: 300,
            typ_body_length_error: 500,
        }
    }
}

/// Line terminator style enforced by the formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBreaks {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
    /// `\r`
    Cr,
}

/// Formatter preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRules {
    /// Indent width in spaces.
    pub indent: i64,
    /// Maximum line width.
    pub max_width: i64,
    /// Line terminator style.
    pub line_breaks: LineBreaks,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            indent: 4,
            max_width: 120,
            line_breaks: LineBreaks::Lf,
        }
    }
}

/// Settings record governing lint/format thresholds and install toggles.
///
/// # Examples
///
/// ```
/// use devtools_setup::settings::{LineBreaks, Settings};
///
/// let settings = Settings::default();
/// assert_eq!(settings.lint_rules.warning_threshold, 10);
/// assert_eq!(settings.format_rules.line_breaks, LineBreaks::Lf);
/// assert!(settings.enable_pre_commit_hooks);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Lint thresholds.
    pub lint_rules: LintRules,
    /// Formatter preferences.
    pub format_rules: FormatRules,
    /// Whether the git hook step installs hooks.
    pub enable_pre_commit_hooks: bool,
    /// Whether hooks auto-format staged files.
    pub auto_format: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lint_rules: LintRules::default(),
            format_rules: FormatRules::default(),
            enable_pre_commit_hooks: true,
            auto_format: true,
        }
    }
}

impl Settings {
    /// Decode settings from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the parser error if `bytes` is not a complete settings object.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Encode settings as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Serialize`] if encoding fails.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(|source| SettingsError::Serialize { source })
    }

    /// Decode `bytes`, substituting the default settings when they are not a
    /// valid settings object.  The parse error is logged, not returned.
    #[must_use]
    pub fn parse_or_default(bytes: &[u8], origin: &Path) -> Self {
        match Self::from_json(bytes) {
            Ok(settings) => settings,
            Err(source) => {
                let err = SettingsError::Parse {
                    path: origin.to_path_buf(),
                    source,
                };
                tracing::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from `path`, falling back to the defaults if the file is
    /// missing, unreadable or corrupt.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => Self::parse_or_default(&bytes, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no settings file at {}; using defaults", path.display());
                Self::default()
            }
            Err(source) => {
                let err = SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                };
                tracing::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings to `path` as pretty JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if encoding or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let mut json = self.to_json()?;
        json.push('\n');
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
