//! Helpers for the log file: its location, ANSI stripping, timestamps.
use std::path::PathBuf;

/// Remove CSI escape sequences (`ESC [ params final`) from `s`.
///
/// The final byte is anything in `@`..=`~`, so colors as well as cursor and
/// erase sequences go. A lone `ESC` drops only itself and the next char.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.next() == Some('[') {
            chars.by_ref().find(|ch| ('@'..='~').contains(ch));
        }
    }
    out
}

/// `$XDG_CACHE_HOME/devtools-setup`, falling back to `~/.cache`; created on
/// demand.
fn cache_dir() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CACHE_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME")
                .or_else(|| std::env::var_os("USERPROFILE"))
                .map(|home| PathBuf::from(home).join(".cache"))
        })?;
    let dir = base.join("devtools-setup");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// `<cache>/devtools-setup/<command>.log`, or `None` without a usable cache
/// directory.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(format!("{command}.log")))
}

/// Current UTC time as `YYYY-MM-DD HH:MM:SS`.
pub(super) fn format_utc_datetime() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current UTC time as `HH:MM:SS`.
pub(super) fn format_utc_time() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}
