//! Filesystem locations used by the notice binary.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that points at a config file, overriding the default.
pub const CONFIG_ENV: &str = "NOTICE_CONFIG";

/// Path to the debug log file, in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("notice.log")
}

/// Path to the config file.
///
/// `$NOTICE_CONFIG` wins; otherwise `notice/config.json` under
/// `$XDG_CONFIG_HOME`, falling back to `~/.config`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_path_from(&mut var_os)
}

fn config_path_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let base = var_os("XDG_CONFIG_HOME")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir_from(var_os).map(|home| home.join(".config")))?;
    Some(base.join("notice").join("config.json"))
}

#[cfg(windows)]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("USERPROFILE")
        .or_else(|| var_os("HOME"))
        .map(PathBuf::from)
}

#[cfg(not(windows))]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("HOME").map(PathBuf::from)
}
