//! Preference mutations: theme toggle and language switch.
//!
//! Both are POST forms that redirect back to the page they were
//! submitted from via a hidden `next` field, so toggling never loses the
//! visitor's place or active filters.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::i18n::{APPLY_DELAY, Language, SETTLE_DELAY};
use crate::state::SiteState;

use super::safe_next;

/// Body of the theme toggle form.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    /// Page to return to.
    #[serde(default)]
    pub next: String,
}

/// Body of the language switch form.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    /// Target language code.
    #[serde(default)]
    pub lang: String,
    /// Page to return to.
    #[serde(default)]
    pub next: String,
}

/// POST `/settings/theme` — flip dark mode and persist it.
pub async fn set_theme(State(state): State<SiteState>, Form(form): Form<ThemeForm>) -> Redirect {
    let settings = state.settings.update(|s| s.dark_mode = !s.dark_mode);
    tracing::info!(dark_mode = settings.dark_mode, "theme toggled");
    Redirect::to(safe_next(&form.next))
}

/// POST `/settings/language` — start a language transition.
///
/// The switch is not applied inline: the transition machine enters its
/// fade phase here and a background task applies the language at the
/// 150ms mark, then clears the busy flag 150ms later. Pages rendered in
/// between dim their content and disable the switcher buttons.
pub async fn set_language(
    State(state): State<SiteState>,
    Form(form): Form<LanguageForm>,
) -> Redirect {
    let redirect = Redirect::to(safe_next(&form.next));
    let Some(target) = Language::from_code(&form.lang) else {
        tracing::warn!(raw = %form.lang, "language switch with unknown code ignored");
        return redirect;
    };
    if target == state.i18n.language() {
        tracing::debug!(language = target.code(), "language already active");
        return redirect;
    }

    let started = {
        let mut switch = state
            .switcher
            .lock()
            .expect("language switcher lock poisoned");
        switch.begin(target, state.clock.now())
    };
    if started {
        tracing::info!(language = target.code(), "language switch started");
        let driver = state.clone();
        tokio::spawn(async move { drive_language_switch(driver).await });
    }
    redirect
}

/// What: Walk one transition through both phases on real time.
///
/// Inputs:
/// - `state`: Shared state carrying the switcher, engine and settings
///
/// Details:
/// - Sleeps to each deadline and polls the machine with the injected
///   clock. The poll that crosses the apply deadline yields the target
///   language exactly once; it is applied to the engine and persisted
///   in the same step. The second poll only lets the machine settle
///   back to idle.
async fn drive_language_switch(state: SiteState) {
    tokio::time::sleep(APPLY_DELAY).await;
    let applied = {
        let mut switch = state
            .switcher
            .lock()
            .expect("language switcher lock poisoned");
        switch.poll(state.clock.now())
    };
    if let Some(language) = applied {
        state.i18n.set_language(language);
        state.settings.update(|s| s.language = language);
        tracing::info!(language = language.code(), "language applied");
    }

    tokio::time::sleep(SETTLE_DELAY).await;
    let mut switch = state
        .switcher
        .lock()
        .expect("language switcher lock poisoned");
    switch.poll(state.clock.now());
}
