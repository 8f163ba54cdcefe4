//! Persisted site preferences: `key = value` settings file, path
//! resolution, and the thread-safe store the handlers talk to.

pub mod parse;
pub mod paths;
pub mod store;
pub mod types;

// Public re-exports to keep existing paths working
pub use parse::{parse_settings, render_settings};
pub use paths::{CONFIG_DIR_ENV, locales_dir, logs_dir, resolve_config_dir, settings_path};
pub use store::SettingsStore;
pub use types::Settings;

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
