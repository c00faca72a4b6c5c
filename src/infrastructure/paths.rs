//! Platform directory resolution.
//!
//! Data (the local store and the log file) and configuration live in the
//! platform's per-user directories, e.g. `~/.local/share/adboard` and
//! `~/.config/adboard` on Linux. When no home directory can be determined, both
//! fall back to `.adboard` under the working directory.

use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "adboard";
const APPLICATION: &str = "adboard";

/// Directory name used when the platform directories are unavailable.
const FALLBACK_DIR: &str = ".adboard";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Returns the data directory holding `adboard.json` and `adboard.log`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(FALLBACK_DIR),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Returns the directory searched for `config.toml`.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(FALLBACK_DIR),
        |dirs| dirs.config_dir().to_path_buf(),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use adboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_leaves_other_paths() {
        assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
        assert_eq!(expand_tilde("~user/dir"), PathBuf::from("~user/dir"));
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        let Some(home) = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()) else {
            return;
        };
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("~/ads"), home.join("ads"));
    }

    #[test]
    fn test_dirs_end_in_application_name() {
        let data = get_data_dir();
        assert!(data.to_string_lossy().to_lowercase().contains("adboard"));
    }
}
