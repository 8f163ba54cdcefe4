//! HTTP surface of the site.
//!
//! One route per page or mutation; unknown paths fall through to the
//! localized not-found page. Handlers receive a cloned [`SiteState`] via
//! the router state.

pub mod handlers;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SiteState;

/// What: Build the site router with every route bound to `state`.
///
/// Inputs:
/// - `state`: Shared application state cloned into each handler
///
/// Output:
/// - Ready-to-serve router; public pages, preference mutations and the
///   management screens, with a localized 404 fallback.
#[must_use]
pub fn router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/about", get(handlers::pages::about))
        .route("/blog", get(handlers::pages::blog_index))
        .route("/blog/:slug", get(handlers::pages::blog_detail))
        .route("/portfolio", get(handlers::pages::portfolio_index))
        .route("/portfolio/:slug", get(handlers::pages::portfolio_detail))
        .route("/healthz", get(handlers::pages::health))
        .route("/settings/theme", post(handlers::prefs::set_theme))
        .route("/settings/language", post(handlers::prefs::set_language))
        .route("/admin", get(handlers::admin::dashboard))
        .route(
            "/admin/authors",
            get(handlers::admin::authors).post(handlers::admin::create_author),
        )
        .route(
            "/admin/authors/:id/delete",
            post(handlers::admin::delete_author),
        )
        .route(
            "/admin/team-members",
            get(handlers::admin::team).post(handlers::admin::create_team_member),
        )
        .route(
            "/admin/team-members/:id/delete",
            post(handlers::admin::delete_team_member),
        )
        .route(
            "/admin/technologies",
            get(handlers::admin::technologies).post(handlers::admin::create_technology),
        )
        .route(
            "/admin/technologies/:id/delete",
            post(handlers::admin::delete_technology),
        )
        .route("/admin/posts", get(handlers::admin::posts))
        .route("/admin/posts/:id/delete", post(handlers::admin::delete_post))
        .route(
            "/admin/portfolio",
            get(handlers::admin::portfolio).post(handlers::admin::create_portfolio),
        )
        .route(
            "/admin/portfolio/:id/delete",
            post(handlers::admin::delete_portfolio),
        )
        .route(
            "/admin/portfolio/:id/publish",
            post(handlers::admin::publish_portfolio),
        )
        .fallback(handlers::pages::not_found)
        .with_state(state)
}
