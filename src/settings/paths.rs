//! Configuration directory resolution.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "BAJRAWEB_CONFIG_DIR";

/// What: Resolve the configuration directory, searching in priority order.
///
/// Inputs:
/// - `cli_override`: Directory from the `--config-dir` flag, if given
///
/// Output:
/// - Directory to use for `settings.conf`, locale overrides and logs.
///
/// Details:
/// - Priority: CLI flag, then `BAJRAWEB_CONFIG_DIR`, then whichever of
///   `$XDG_CONFIG_HOME/bajraweb`, `$HOME/.config/bajraweb`, `./config`
///   already holds a `settings.conf`, then the first of those candidates
///   as the place to create one.
/// - The directory is not created here; the settings store creates it
///   lazily when writing the first skeleton.
#[must_use]
pub fn resolve_config_dir(cli_override: Option<&Path>) -> PathBuf {
    if let Some(dir) = cli_override {
        return dir.to_path_buf();
    }
    if let Ok(dir) = env::var(CONFIG_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        candidates.push(Path::new(&xdg).join("bajraweb"));
    }
    if let Ok(home) = env::var("HOME") {
        candidates.push(Path::new(&home).join(".config").join("bajraweb"));
    }
    candidates.push(PathBuf::from("config"));

    if let Some(found) = candidates
        .iter()
        .find(|dir| dir.join("settings.conf").is_file())
    {
        return found.clone();
    }
    candidates
        .into_iter()
        .next()
        .unwrap_or_else(|| PathBuf::from("config"))
}

/// `settings.conf` path inside the resolved config directory.
#[must_use]
pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.conf")
}

/// Locale override directory, when it exists.
#[must_use]
pub fn locales_dir(config_dir: &Path) -> Option<PathBuf> {
    let dir = config_dir.join("locales");
    dir.is_dir().then_some(dir)
}

/// Logs directory under config (ensured to exist).
#[must_use]
pub fn logs_dir(config_dir: &Path) -> PathBuf {
    let dir = config_dir.join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_cli_override_wins() {
        let _guard = crate::settings::test_mutex().lock().expect("test mutex");
        let dir = resolve_config_dir(Some(Path::new("/tmp/custom-conf")));
        assert_eq!(dir, PathBuf::from("/tmp/custom-conf"));
    }

    #[test]
    fn paths_env_override_beats_candidates() {
        let _guard = crate::settings::test_mutex().lock().expect("test mutex");
        let orig = std::env::var_os(CONFIG_DIR_ENV);
        unsafe { std::env::set_var(CONFIG_DIR_ENV, "/tmp/env-conf") };
        let dir = resolve_config_dir(None);
        unsafe {
            if let Some(v) = orig {
                std::env::set_var(CONFIG_DIR_ENV, v);
            } else {
                std::env::remove_var(CONFIG_DIR_ENV);
            }
        }
        assert_eq!(dir, PathBuf::from("/tmp/env-conf"));
    }

    #[test]
    fn paths_existing_settings_file_selected() {
        let _guard = crate::settings::test_mutex().lock().expect("test mutex");
        let temp = tempfile::TempDir::new().expect("temp dir");
        let base = temp.path().join("bajraweb");
        std::fs::create_dir_all(&base).expect("create config dir");
        std::fs::write(base.join("settings.conf"), "language = id\n").expect("write conf");

        let orig_xdg = std::env::var_os("XDG_CONFIG_HOME");
        let orig_env = std::env::var_os(CONFIG_DIR_ENV);
        unsafe {
            std::env::remove_var(CONFIG_DIR_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp.path());
        }
        let dir = resolve_config_dir(None);
        unsafe {
            if let Some(v) = orig_xdg {
                std::env::set_var("XDG_CONFIG_HOME", v);
            } else {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
            if let Some(v) = orig_env {
                std::env::set_var(CONFIG_DIR_ENV, v);
            }
        }
        assert_eq!(dir, base);
    }

    #[test]
    fn paths_logs_dir_created_under_config() {
        let temp = tempfile::TempDir::new().expect("temp dir");
        let logs = logs_dir(temp.path());
        assert!(logs.ends_with("logs"));
        assert!(logs.is_dir());
    }
}
