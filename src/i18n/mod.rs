//! Internationalization for the site.
//!
//! The site ships exactly two languages, English (`en`) and Indonesian
//! (`id`), with English as the default. Dictionaries are YAML files with
//! a single top-level locale key whose nested structure is flattened into
//! dot-notation keys:
//!
//! ```yaml
//! en:
//!   blog:
//!     title: "Blog"
//! ```
//!
//! becomes accessible as `blog.title`.
//!
//! # Behaviour
//!
//! - Lookup never fails: a missing key logs one warning and returns the
//!   key itself so broken copy is visible on the page but never fatal.
//! - The active language comes only from persisted settings or an explicit
//!   switch; the host system locale is never consulted.
//! - Both dictionaries are expected to cover the same key set; gaps are
//!   reported at startup by [`loader::coverage_gaps`].
//! - Language switches run through the two-phase machine in [`switcher`];
//!   the engine itself just swaps the active table.

pub mod loader;
pub mod switcher;
pub mod translations;

pub use loader::{coverage_gaps, load_locale_file, load_or_embedded};
pub use switcher::{APPLY_DELAY, Clock, LanguageSwitch, SETTLE_DELAY, SystemClock};
pub use translations::{TranslationMap, interpolate, translate};

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Indonesian.
    Id,
}

impl Language {
    /// Every supported language, default first.
    pub const ALL: [Self; 2] = [Self::En, Self::Id];

    /// Two-letter code used in settings, URLs and locale file names.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }

    /// Name of the language in that language, for the switcher buttons.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Id => "Bahasa Indonesia",
        }
    }

    /// What: Parse a language code.
    ///
    /// Inputs:
    /// - `code`: Raw value from settings or a form, any case
    ///
    /// Output:
    /// - `Some(language)` for the two known codes, `None` otherwise.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "id" => Some(Self::Id),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translation engine holding both dictionaries and the active language.
///
/// Shared behind an `Arc`; lookups take a read lock on the active
/// language only, so concurrent page renders never contend on the maps
/// themselves.
pub struct I18n {
    /// Flattened dictionary per language.
    tables: HashMap<Language, TranslationMap>,
    /// Currently active language.
    active: RwLock<Language>,
    /// Count of lookups that missed the active dictionary.
    missing: AtomicU64,
}

impl I18n {
    /// What: Build an engine from preloaded dictionaries.
    ///
    /// Inputs:
    /// - `tables`: Dictionary per language
    /// - `initial`: Language active at startup
    #[must_use]
    pub fn new(tables: HashMap<Language, TranslationMap>, initial: Language) -> Self {
        Self {
            tables,
            active: RwLock::new(initial),
            missing: AtomicU64::new(0),
        }
    }

    /// What: Load dictionaries for every language and build the engine.
    ///
    /// Inputs:
    /// - `locales_dir`: Optional override directory for locale files
    /// - `initial`: Language active at startup
    ///
    /// Output:
    /// - Ready engine; coverage gaps between the dictionaries are logged
    ///   as warnings.
    #[must_use]
    pub fn load(locales_dir: Option<&Path>, initial: Language) -> Self {
        let mut tables = HashMap::new();
        for lang in Language::ALL {
            tables.insert(lang, load_or_embedded(lang, locales_dir));
        }
        for gap in coverage_gaps(&tables) {
            tracing::warn!(gap, "translation key not covered by every language");
        }
        Self::new(tables, initial)
    }

    /// Currently active language.
    #[must_use]
    pub fn language(&self) -> Language {
        *self.active.read().expect("language lock poisoned")
    }

    /// What: Make `language` the active dictionary for all future lookups.
    pub fn set_language(&self, language: Language) {
        *self.active.write().expect("language lock poisoned") = language;
    }

    /// What: Look up a translation in the active language.
    ///
    /// Inputs:
    /// - `key`: Dot-notation key (e.g. "blog.title")
    ///
    /// Output:
    /// - The translated string, or the key itself when no entry exists.
    ///
    /// Details:
    /// - A miss logs exactly one warning and bumps the missing-lookup
    ///   counter; it never falls back to the other language, so gaps are
    ///   caught by the startup coverage check rather than papered over.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        let lang = self.language();
        match self.tables.get(&lang).and_then(|map| map.get(key)) {
            Some(text) => text.clone(),
            None => {
                self.missing.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(key, language = lang.code(), "missing translation key");
                key.to_string()
            }
        }
    }

    /// What: Look up a translation and substitute named placeholders.
    ///
    /// Inputs:
    /// - `key`: Dot-notation key
    /// - `args`: Name/value pairs for `{name}` markers
    ///
    /// Output:
    /// - Interpolated translation; on a missing key the raw key (which
    ///   carries no markers) comes back unchanged.
    #[must_use]
    pub fn t_args(&self, key: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
        interpolate(&self.t(key), args)
    }

    /// Number of lookups so far that missed the active dictionary.
    #[must_use]
    pub fn missing_key_lookups(&self) -> u64 {
        self.missing.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("language", &self.language())
            .field("languages", &self.tables.len())
            .finish_non_exhaustive()
    }
}
