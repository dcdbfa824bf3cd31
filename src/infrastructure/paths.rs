//! Path resolution for on-disk application data.
//!
//! This module decides where favorites slots and log files live. It follows the
//! XDG base directory convention and falls back to the home directory.

use std::env;
use std::path::PathBuf;

/// Directory name used under the platform data directory.
const APP_DIR: &str = "rickdex";

/// Returns the data directory for rickdex storage.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/rickdex` when `XDG_DATA_HOME` is set and absolute
/// 2. `$HOME/.local/share/rickdex`
/// 3. `./.rickdex` when no home directory is known
///
/// The favorites slot file and `rickdex.log` are located within this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(env::var_os("XDG_DATA_HOME").map(PathBuf::from), env::var_os("HOME").map(PathBuf::from))
}

fn resolve_data_dir(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|p| p.is_absolute()) {
        return xdg.join(APP_DIR);
    }

    home.filter(|p| !p.as_os_str().is_empty()).map_or_else(
        || PathBuf::from(format!(".{APP_DIR}")),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// # Examples
///
/// ```
/// use rickdex::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_absolute_xdg_data_home() {
        let dir = resolve_data_dir(Some("/xdg".into()), Some("/home/me".into()));
        assert_eq!(dir, PathBuf::from("/xdg/rickdex"));
    }

    #[test]
    fn ignores_relative_xdg_data_home() {
        let dir = resolve_data_dir(Some("relative".into()), Some("/home/me".into()));
        assert_eq!(dir, PathBuf::from("/home/me/.local/share/rickdex"));
    }

    #[test]
    fn falls_back_to_working_directory() {
        assert_eq!(resolve_data_dir(None, None), PathBuf::from(".rickdex"));
    }

    #[test]
    fn expands_tilde() {
        assert_eq!(expand_tilde_with("~/data", Some("/home/me/")), "/home/me/data");
        assert_eq!(expand_tilde_with("~", Some("/home/me")), "/home/me");
        assert_eq!(expand_tilde_with("~other", Some("/home/me")), "~other");
        assert_eq!(expand_tilde_with("~/data", None), "~/data");
    }
}
