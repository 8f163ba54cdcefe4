//! Request handlers, split by surface.

pub mod admin;
pub mod pages;
pub mod prefs;

use axum::http::Uri;
use axum::response::Html;
use serde::Deserialize;

use crate::logic::FilterState;
use crate::state::SiteState;
use crate::ui::{Chrome, NavSection, render_shell};

/// Query parameters accepted by every listing page.
///
/// All three are optional; absent or unknown values land on the neutral
/// filter so a bad query string can never break a listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    /// Free-text search input.
    #[serde(default)]
    pub q: String,
    /// Selected category slug.
    #[serde(default)]
    pub category: String,
    /// Selected publication status.
    #[serde(default)]
    pub status: String,
}

impl ListingQuery {
    /// Normalized filter state for these parameters.
    #[must_use]
    pub fn filter_state(&self) -> FilterState {
        FilterState::from_params(&self.q, &self.category, &self.status)
    }
}

/// What: Wrap a rendered body in the document shell for this request.
///
/// Inputs:
/// - `state`: Shared application state
/// - `active`: Navigation section to highlight
/// - `uri`: Request URI; path and query feed the preference forms so a
///   toggle redirects back to the exact page, filters included
/// - `title`: Page title
/// - `body`: Rendered `<main>` content
pub(crate) fn page(
    state: &SiteState,
    active: NavSection,
    uri: &Uri,
    title: &str,
    body: &str,
) -> Html<String> {
    let current_path = current_path(uri);
    let settings = state.settings.get();
    let chrome = Chrome {
        i18n: &state.i18n,
        language: state.i18n.language(),
        dark_mode: settings.dark_mode,
        language_changing: state.language_changing(),
        active,
        current_path: &current_path,
    };
    Html(render_shell(&chrome, title, body))
}

/// Request path with its query string, as written in links and forms.
pub(crate) fn current_path(uri: &Uri) -> String {
    uri.path_and_query()
        .map_or_else(|| uri.path().to_string(), |pq| pq.as_str().to_string())
}

/// Redirect target taken from a form's hidden `next` field.
///
/// Only same-origin absolute paths are honoured; anything else falls
/// back to the landing page so the field cannot turn into an open
/// redirect.
pub(crate) fn safe_next(next: &str) -> &str {
    if next.starts_with('/') && !next.starts_with("//") {
        next
    } else {
        "/"
    }
}
