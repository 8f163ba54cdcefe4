//! Settings store bound to a `settings.conf` file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::settings::parse::{parse_settings, render_settings};
use crate::settings::types::Settings;

/// Thread-safe settings holder that persists every change to disk.
///
/// Reads are lock-protected copies; writes rewrite the whole file from
/// the rendered skeleton so comments stay intact across edits the site
/// makes itself.
#[derive(Debug)]
pub struct SettingsStore {
    /// Backing file path.
    path: PathBuf,
    /// Current in-memory values.
    current: RwLock<Settings>,
}

impl SettingsStore {
    /// What: Load settings from `path`, writing a default skeleton when
    /// the file is missing or empty.
    ///
    /// Inputs:
    /// - `path`: Full path to `settings.conf`
    ///
    /// Output:
    /// - Store primed with the parsed (or default) settings.
    ///
    /// Details:
    /// - A failed skeleton write is logged and the store continues with
    ///   in-memory defaults; preferences then simply do not survive a
    ///   restart.
    #[must_use]
    pub fn load_or_init(path: PathBuf) -> Self {
        let settings = match fs::read_to_string(&path) {
            Ok(content) if !content.trim().is_empty() => {
                let parsed = parse_settings(&content);
                tracing::info!(
                    path = %path.display(),
                    language = parsed.language.code(),
                    dark_mode = parsed.dark_mode,
                    "loaded settings"
                );
                parsed
            }
            _ => {
                let defaults = Settings::default();
                if let Some(parent) = path.parent() {
                    let _ = fs::create_dir_all(parent);
                }
                match fs::write(&path, render_settings(&defaults)) {
                    Ok(()) => {
                        tracing::info!(path = %path.display(), "wrote default settings skeleton");
                    }
                    Err(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %err,
                            "could not write settings skeleton; preferences will not persist"
                        );
                    }
                }
                defaults
            }
        };
        Self {
            path,
            current: RwLock::new(settings),
        }
    }

    /// Current settings snapshot.
    #[must_use]
    pub fn get(&self) -> Settings {
        *self.current.read().expect("settings lock poisoned")
    }

    /// What: Apply a mutation and persist the result.
    ///
    /// Inputs:
    /// - `apply`: Closure mutating the current settings
    ///
    /// Output:
    /// - The settings after the mutation.
    ///
    /// Details:
    /// - The file write happens outside the lock; a failure is logged and
    ///   the in-memory value still stands.
    pub fn update(&self, apply: impl FnOnce(&mut Settings)) -> Settings {
        let snapshot = {
            let mut guard = self.current.write().expect("settings lock poisoned");
            apply(&mut guard);
            *guard
        };
        if let Err(err) = fs::write(&self.path, render_settings(&snapshot)) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to persist settings"
            );
        }
        snapshot
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
