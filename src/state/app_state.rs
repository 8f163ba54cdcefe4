//! Shared per-process state handed to every request handler.

use std::sync::{Arc, Mutex};

use crate::i18n::I18n;
use crate::i18n::switcher::{Clock, LanguageSwitch, SystemClock};
use crate::settings::SettingsStore;
use crate::sources::ApiClient;

/// Application state cloned into each handler by the router.
///
/// Everything mutable lives behind its own synchronization primitive, so
/// the struct itself is a cheap bundle of handles. The clock is injectable
/// so the language-switch transition can be driven without real timers in
/// tests.
#[derive(Clone)]
pub struct SiteState {
    /// HTTP client for the CMS REST backend.
    pub api: ApiClient,
    /// Translation engine holding both dictionaries and the active language.
    pub i18n: Arc<I18n>,
    /// Persisted user preferences (language, dark mode).
    pub settings: Arc<SettingsStore>,
    /// Two-phase language transition state machine.
    pub switcher: Arc<Mutex<LanguageSwitch>>,
    /// Time source consulted by the transition machine.
    pub clock: Arc<dyn Clock>,
}

impl SiteState {
    /// What: Assemble the shared state from its already-configured parts.
    ///
    /// Inputs:
    /// - `api`: Backend client
    /// - `i18n`: Loaded translation engine
    /// - `settings`: Settings store bound to its config file
    /// - `clock`: Time source for the language transition
    ///
    /// Output:
    /// - `SiteState` with an idle language switcher.
    #[must_use]
    pub fn new(
        api: ApiClient,
        i18n: Arc<I18n>,
        settings: Arc<SettingsStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api,
            i18n,
            settings,
            switcher: Arc::new(Mutex::new(LanguageSwitch::new())),
            clock,
        }
    }

    /// What: Build state with [`SystemClock`] as the time source.
    #[must_use]
    pub fn with_system_clock(
        api: ApiClient,
        i18n: Arc<I18n>,
        settings: Arc<SettingsStore>,
    ) -> Self {
        Self::new(api, i18n, settings, Arc::new(SystemClock))
    }

    /// Whether a language transition is currently in flight.
    #[must_use]
    pub fn language_changing(&self) -> bool {
        self.switcher
            .lock()
            .map(|s| s.is_changing())
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for SiteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteState")
            .field("api", &self.api)
            .field("language", &self.i18n.language())
            .finish_non_exhaustive()
    }
}
