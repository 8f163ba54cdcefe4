//! Persisted user preference values.

use crate::i18n::Language;

/// User preferences persisted in `settings.conf`.
///
/// One set of preferences per process; the site has no per-visitor
/// accounts, so whoever runs the instance decides its language and theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Active UI language.
    pub language: Language,
    /// Whether the dark color scheme is active.
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            dark_mode: false,
        }
    }
}
