//! Public page handlers.
//!
//! Fetch failures never escape as HTTP errors: each handler catches its
//! own backend error and renders a localized error panel in the page
//! body, so the shell, navigation and preference controls stay usable.

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::Html;

use crate::logic::{apply_filters, distinct_categories};
use crate::sources::{portfolio, posts, team};
use crate::state::SiteState;
use crate::ui::pages as views;
use crate::ui::{NavSection, widgets};

use super::{ListingQuery, current_path, page};

/// GET `/` — landing page, static copy only.
pub async fn home(State(state): State<SiteState>, uri: Uri) -> Html<String> {
    let body = views::home::render_home(&state.i18n);
    let title = state.i18n.t("nav.home");
    page(&state, NavSection::Home, &uri, &title, &body)
}

/// GET `/about` — company story plus the team grid.
pub async fn about(State(state): State<SiteState>, uri: Uri) -> Html<String> {
    let i18n = &state.i18n;
    let body = match team::fetch_members(&state.api).await {
        Ok(members) => views::about::render_about(i18n, Ok(&members)),
        Err(err) => {
            tracing::error!(error = %err, "team fetch failed");
            views::about::render_about(i18n, Err(&err.to_string()))
        }
    };
    let title = i18n.t("nav.about");
    page(&state, NavSection::About, &uri, &title, &body)
}

/// GET `/blog` — published posts with search and category filtering.
///
/// The category dropdown is derived from the fetched posts themselves;
/// the blog backend has no category endpoint.
pub async fn blog_index(
    State(state): State<SiteState>,
    Query(query): Query<ListingQuery>,
    uri: Uri,
) -> Html<String> {
    let i18n = &state.i18n;
    let filter = query.filter_state();
    let body = match posts::fetch_published(&state.api).await {
        Ok(all) => {
            let filtered = apply_filters(&all, &filter);
            let categories = distinct_categories(&all);
            views::blog::render_index(i18n, &filtered, &categories, &filter)
        }
        Err(err) => {
            tracing::error!(error = %err, "post fetch failed");
            widgets::error_panel(i18n, &err.to_string(), &current_path(&uri))
        }
    };
    let title = i18n.t("nav.blog");
    page(&state, NavSection::Blog, &uri, &title, &body)
}

/// GET `/blog/:slug` — full article.
///
/// A successful render spawns a fire-and-forget view-count bump; the
/// page never waits on it.
pub async fn blog_detail(
    State(state): State<SiteState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> (StatusCode, Html<String>) {
    let i18n = &state.i18n;
    match posts::fetch_by_slug(&state.api, &slug).await {
        Ok(Some(post)) => {
            let api = state.api.clone();
            let viewed = slug.clone();
            tokio::spawn(async move { posts::record_view(&api, &viewed).await });
            let body = views::blog::render_detail(i18n, &post);
            let title = post.title.clone();
            (
                StatusCode::OK,
                page(&state, NavSection::Blog, &uri, &title, &body),
            )
        }
        Ok(None) => not_found_page(&state, &uri),
        Err(err) => {
            tracing::error!(slug, error = %err, "post detail fetch failed");
            let body = widgets::error_panel(i18n, &err.to_string(), &current_path(&uri));
            let title = i18n.t("nav.blog");
            (
                StatusCode::OK,
                page(&state, NavSection::Blog, &uri, &title, &body),
            )
        }
    }
}

/// GET `/portfolio` — published projects with search and category filtering.
///
/// Items and categories are fetched concurrently; a failed category
/// fetch only costs the dropdown, a failed item fetch renders the error
/// panel.
pub async fn portfolio_index(
    State(state): State<SiteState>,
    Query(query): Query<ListingQuery>,
    uri: Uri,
) -> Html<String> {
    let i18n = &state.i18n;
    let filter = query.filter_state();
    let (items, categories) = portfolio::fetch_listing(&state.api).await;
    let body = match items {
        Ok(all) => {
            let filtered = apply_filters(&all, &filter);
            views::portfolio::render_index(i18n, &filtered, &categories, &filter)
        }
        Err(err) => {
            tracing::error!(error = %err, "portfolio fetch failed");
            widgets::error_panel(i18n, &err.to_string(), &current_path(&uri))
        }
    };
    let title = i18n.t("nav.portfolio");
    page(&state, NavSection::Portfolio, &uri, &title, &body)
}

/// GET `/portfolio/:slug` — project case study.
pub async fn portfolio_detail(
    State(state): State<SiteState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> (StatusCode, Html<String>) {
    let i18n = &state.i18n;
    match portfolio::fetch_by_slug(&state.api, &slug).await {
        Ok(Some(item)) => {
            let body = views::portfolio::render_detail(i18n, &item);
            let title = item.title.clone();
            (
                StatusCode::OK,
                page(&state, NavSection::Portfolio, &uri, &title, &body),
            )
        }
        Ok(None) => not_found_page(&state, &uri),
        Err(err) => {
            tracing::error!(slug, error = %err, "portfolio detail fetch failed");
            let body = widgets::error_panel(i18n, &err.to_string(), &current_path(&uri));
            let title = i18n.t("nav.portfolio");
            (
                StatusCode::OK,
                page(&state, NavSection::Portfolio, &uri, &title, &body),
            )
        }
    }
}

/// GET `/healthz` — liveness probe, no shell.
pub async fn health() -> &'static str {
    "ok"
}

/// Router fallback for unknown paths.
pub async fn not_found(State(state): State<SiteState>, uri: Uri) -> (StatusCode, Html<String>) {
    tracing::debug!(path = uri.path(), "no route matched");
    not_found_page(&state, &uri)
}

/// Localized 404 page, shared by the fallback and the detail handlers.
fn not_found_page(state: &SiteState, uri: &Uri) -> (StatusCode, Html<String>) {
    let i18n = &state.i18n;
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">{}</a></p>\n",
        crate::util::escape_html(&i18n.t("common.not_found.title")),
        crate::util::escape_html(&i18n.t("common.not_found.body")),
        crate::util::escape_html(&i18n.t("common.actions.home")),
    );
    let title = i18n.t("common.not_found.title");
    (
        StatusCode::NOT_FOUND,
        page(state, NavSection::None, uri, &title, &body),
    )
}
