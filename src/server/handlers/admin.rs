//! Management screen handlers.
//!
//! Every mutation is a POST that redirects back to its listing, so the
//! table is always re-fetched after a change. Mutation failures are
//! logged and the redirect still happens; the refetched listing shows
//! the actual backend state either way.

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::{Html, Redirect};
use serde::Deserialize;

use crate::logic::{apply_filters, distinct_categories};
use crate::sources::portfolio::NewPortfolioItem;
use crate::sources::{authors, portfolio, posts, team, technologies};
use crate::state::SiteState;
use crate::ui::pages::admin as views;
use crate::ui::{NavSection, widgets};

use super::{ListingQuery, current_path, page};

/// GET `/admin` — dashboard with one card per managed resource.
pub async fn dashboard(State(state): State<SiteState>, uri: Uri) -> Html<String> {
    let body = views::render_dashboard(&state.i18n);
    let title = state.i18n.t("admin.title");
    page(&state, NavSection::Admin, &uri, &title, &body)
}

/// GET `/admin/authors` — author table and create form.
pub async fn authors(State(state): State<SiteState>, uri: Uri) -> Html<String> {
    let i18n = &state.i18n;
    let body = match authors::fetch_authors(&state.api).await {
        Ok(list) => views::render_authors(i18n, &list),
        Err(err) => {
            tracing::error!(error = %err, "author fetch failed");
            widgets::error_panel(i18n, &err.to_string(), &current_path(&uri))
        }
    };
    let title = i18n.t("admin.authors.title");
    page(&state, NavSection::Admin, &uri, &title, &body)
}

/// Body of the author create form.
#[derive(Debug, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// POST `/admin/authors` — create an author, then return to the table.
pub async fn create_author(
    State(state): State<SiteState>,
    Form(form): Form<AuthorForm>,
) -> Redirect {
    let name = form.name.trim();
    if name.is_empty() {
        tracing::warn!("author create skipped; empty name");
    } else if let Err(err) = authors::create_author(&state.api, name, form.email.trim()).await {
        tracing::error!(error = %err, "author create failed");
    }
    Redirect::to("/admin/authors")
}

/// POST `/admin/authors/:id/delete`.
pub async fn delete_author(State(state): State<SiteState>, Path(id): Path<String>) -> Redirect {
    if let Err(err) = authors::delete_author(&state.api, &id).await {
        tracing::error!(id, error = %err, "author delete failed");
    }
    Redirect::to("/admin/authors")
}

/// GET `/admin/team-members` — team table and create form.
pub async fn team(State(state): State<SiteState>, uri: Uri) -> Html<String> {
    let i18n = &state.i18n;
    let body = match team::fetch_members(&state.api).await {
        Ok(list) => views::render_team(i18n, &list),
        Err(err) => {
            tracing::error!(error = %err, "team fetch failed");
            widgets::error_panel(i18n, &err.to_string(), &current_path(&uri))
        }
    };
    let title = i18n.t("admin.team.title");
    page(&state, NavSection::Admin, &uri, &title, &body)
}

/// Body of the team member create form.
#[derive(Debug, Deserialize)]
pub struct TeamMemberForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// POST `/admin/team-members`.
pub async fn create_team_member(
    State(state): State<SiteState>,
    Form(form): Form<TeamMemberForm>,
) -> Redirect {
    let name = form.name.trim();
    if name.is_empty() {
        tracing::warn!("team member create skipped; empty name");
    } else if let Err(err) = team::create_member(&state.api, name, form.role.trim()).await {
        tracing::error!(error = %err, "team member create failed");
    }
    Redirect::to("/admin/team-members")
}

/// POST `/admin/team-members/:id/delete`.
pub async fn delete_team_member(
    State(state): State<SiteState>,
    Path(id): Path<String>,
) -> Redirect {
    if let Err(err) = team::delete_member(&state.api, &id).await {
        tracing::error!(id, error = %err, "team member delete failed");
    }
    Redirect::to("/admin/team-members")
}

/// GET `/admin/technologies` — technology table and create form.
pub async fn technologies(State(state): State<SiteState>, uri: Uri) -> Html<String> {
    let i18n = &state.i18n;
    let body = match technologies::fetch_technologies(&state.api).await {
        Ok(list) => views::render_technologies(i18n, &list),
        Err(err) => {
            tracing::error!(error = %err, "technology fetch failed");
            widgets::error_panel(i18n, &err.to_string(), &current_path(&uri))
        }
    };
    let title = i18n.t("admin.technologies.title");
    page(&state, NavSection::Admin, &uri, &title, &body)
}

/// Body of the technology create form.
#[derive(Debug, Deserialize)]
pub struct TechnologyForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon_url: String,
}

/// POST `/admin/technologies`.
pub async fn create_technology(
    State(state): State<SiteState>,
    Form(form): Form<TechnologyForm>,
) -> Redirect {
    let name = form.name.trim();
    if name.is_empty() {
        tracing::warn!("technology create skipped; empty name");
    } else if let Err(err) =
        technologies::create_technology(&state.api, name, form.icon_url.trim()).await
    {
        tracing::error!(error = %err, "technology create failed");
    }
    Redirect::to("/admin/technologies")
}

/// POST `/admin/technologies/:id/delete`.
pub async fn delete_technology(
    State(state): State<SiteState>,
    Path(id): Path<String>,
) -> Redirect {
    if let Err(err) = technologies::delete_technology(&state.api, &id).await {
        tracing::error!(id, error = %err, "technology delete failed");
    }
    Redirect::to("/admin/technologies")
}

/// GET `/admin/posts` — every post, drafts included, with search and
/// status filtering.
pub async fn posts(
    State(state): State<SiteState>,
    Query(query): Query<ListingQuery>,
    uri: Uri,
) -> Html<String> {
    let i18n = &state.i18n;
    let filter = query.filter_state();
    let body = match posts::fetch_all(&state.api).await {
        Ok(all) => {
            let filtered = apply_filters(&all, &filter);
            views::render_posts(i18n, &filtered, &filter)
        }
        Err(err) => {
            tracing::error!(error = %err, "admin post fetch failed");
            widgets::error_panel(i18n, &err.to_string(), &current_path(&uri))
        }
    };
    let title = i18n.t("admin.posts.title");
    page(&state, NavSection::Admin, &uri, &title, &body)
}

/// POST `/admin/posts/:id/delete`.
pub async fn delete_post(State(state): State<SiteState>, Path(id): Path<String>) -> Redirect {
    if let Err(err) = posts::delete(&state.api, &id).await {
        tracing::error!(id, error = %err, "post delete failed");
    }
    Redirect::to("/admin/posts")
}

/// GET `/admin/portfolio` — every item with the full filter pipeline
/// (search, category, status) and the create form.
pub async fn portfolio(
    State(state): State<SiteState>,
    Query(query): Query<ListingQuery>,
    uri: Uri,
) -> Html<String> {
    let i18n = &state.i18n;
    let filter = query.filter_state();
    let body = match portfolio::fetch_all(&state.api).await {
        Ok(all) => {
            let filtered = apply_filters(&all, &filter);
            let categories = distinct_categories(&all);
            views::render_portfolio(i18n, &filtered, &categories, &filter)
        }
        Err(err) => {
            tracing::error!(error = %err, "admin portfolio fetch failed");
            widgets::error_panel(i18n, &err.to_string(), &current_path(&uri))
        }
    };
    let title = i18n.t("admin.portfolio.title");
    page(&state, NavSection::Admin, &uri, &title, &body)
}

/// Body of the portfolio create form.
#[derive(Debug, Deserialize)]
pub struct PortfolioForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// POST `/admin/portfolio` — create a draft item.
pub async fn create_portfolio(
    State(state): State<SiteState>,
    Form(form): Form<PortfolioForm>,
) -> Redirect {
    let title = form.title.trim();
    if title.is_empty() {
        tracing::warn!("portfolio create skipped; empty title");
    } else {
        let item = NewPortfolioItem {
            title: title.to_string(),
            client_name: form.client_name.trim().to_string(),
            category: form.category.trim().to_string(),
            description: form.description.trim().to_string(),
        };
        if let Err(err) = portfolio::create(&state.api, &item).await {
            tracing::error!(error = %err, "portfolio create failed");
        }
    }
    Redirect::to("/admin/portfolio")
}

/// Body of the publish toggle form.
#[derive(Debug, Deserialize)]
pub struct PublishForm {
    /// Desired published state.
    #[serde(default)]
    pub publish: bool,
}

/// POST `/admin/portfolio/:id/publish` — set the published flag.
pub async fn publish_portfolio(
    State(state): State<SiteState>,
    Path(id): Path<String>,
    Form(form): Form<PublishForm>,
) -> Redirect {
    if let Err(err) = portfolio::set_published(&state.api, &id, form.publish).await {
        tracing::error!(id, error = %err, "portfolio publish toggle failed");
    }
    Redirect::to("/admin/portfolio")
}

/// POST `/admin/portfolio/:id/delete`.
pub async fn delete_portfolio(State(state): State<SiteState>, Path(id): Path<String>) -> Redirect {
    if let Err(err) = portfolio::delete(&state.api, &id).await {
        tracing::error!(id, error = %err, "portfolio delete failed");
    }
    Redirect::to("/admin/portfolio")
}
