//! Management screens: dashboard plus one screen per resource.
//!
//! Mutations are plain POST forms; each handler redirects back to its
//! listing on success so the table always shows refetched data.

use crate::i18n::I18n;
use crate::logic::FilterState;
use crate::state::{Author, BlogPost, Category, PortfolioItem, TeamMember, Technology};
use crate::ui::widgets;
use crate::util::{date_display, escape_attr, escape_html, percent_encode};

/// Dashboard card per resource: path plus translation key prefix.
const RESOURCES: [(&str, &str); 5] = [
    ("/admin/authors", "admin.cards.authors"),
    ("/admin/team-members", "admin.cards.team"),
    ("/admin/technologies", "admin.cards.technologies"),
    ("/admin/portfolio", "admin.cards.portfolio"),
    ("/admin/posts", "admin.cards.posts"),
];

/// What: Render the admin dashboard body.
///
/// Output:
/// - Intro copy and one link card per managed resource.
#[must_use]
pub fn render_dashboard(i18n: &I18n) -> String {
    let cards = RESOURCES
        .iter()
        .map(|(href, key)| {
            format!(
                "<a class=\"card\" href=\"{href}\"><h3>{}</h3><p class=\"meta\">{}</p></a>\n",
                escape_html(&i18n.t(&format!("{key}.title"))),
                escape_html(&i18n.t(&format!("{key}.desc"))),
            )
        })
        .collect::<String>();
    format!(
        "<h1>{title}</h1>\n\
         <p>{subtitle}</p>\n\
         <div class=\"dashboard-links\">\n{cards}</div>\n",
        title = escape_html(&i18n.t("admin.title")),
        subtitle = escape_html(&i18n.t("admin.subtitle")),
        cards = cards,
    )
}

/// What: Render the author management screen.
///
/// Inputs:
/// - `authors`: Current author list from the backend
///
/// Output:
/// - Create form plus a table with a delete action per row.
#[must_use]
pub fn render_authors(i18n: &I18n, authors: &[Author]) -> String {
    let rows = authors
        .iter()
        .map(|author| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&author.name),
                escape_html(&author.email),
                delete_form(
                    i18n,
                    &format!("/admin/authors/{}/delete", percent_encode(&author.id))
                ),
            )
        })
        .collect::<String>();
    let table = if authors.is_empty() {
        widgets::empty_state(&i18n.t("admin.empty"))
    } else {
        format!(
            "<table>\n<tr><th>{}</th><th>{}</th><th>{}</th></tr>\n{rows}</table>\n",
            escape_html(&i18n.t("admin.table.name")),
            escape_html(&i18n.t("admin.table.email")),
            escape_html(&i18n.t("admin.table.actions")),
        )
    };

    format!(
        "<h1>{title}</h1>\n\
         <form class=\"inline-form\" method=\"post\" action=\"/admin/authors\">\n\
         {name_field}{email_field}\
         <button type=\"submit\">{create}</button>\n\
         </form>\n\
         {table}",
        title = escape_html(&i18n.t("admin.authors.title")),
        name_field = text_field(i18n, "name", "admin.form.name", true),
        email_field = text_field(i18n, "email", "admin.form.email", false),
        create = escape_html(&i18n.t("admin.actions.create")),
        table = table,
    )
}

/// What: Render the team member management screen.
#[must_use]
pub fn render_team(i18n: &I18n, members: &[TeamMember]) -> String {
    let rows = members
        .iter()
        .map(|member| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&member.name),
                escape_html(&member.role),
                delete_form(
                    i18n,
                    &format!("/admin/team-members/{}/delete", percent_encode(&member.id))
                ),
            )
        })
        .collect::<String>();
    let table = if members.is_empty() {
        widgets::empty_state(&i18n.t("admin.empty"))
    } else {
        format!(
            "<table>\n<tr><th>{}</th><th>{}</th><th>{}</th></tr>\n{rows}</table>\n",
            escape_html(&i18n.t("admin.table.name")),
            escape_html(&i18n.t("admin.table.role")),
            escape_html(&i18n.t("admin.table.actions")),
        )
    };

    format!(
        "<h1>{title}</h1>\n\
         <form class=\"inline-form\" method=\"post\" action=\"/admin/team-members\">\n\
         {name_field}{role_field}\
         <button type=\"submit\">{create}</button>\n\
         </form>\n\
         {table}",
        title = escape_html(&i18n.t("admin.team.title")),
        name_field = text_field(i18n, "name", "admin.form.name", true),
        role_field = text_field(i18n, "role", "admin.form.role", false),
        create = escape_html(&i18n.t("admin.actions.create")),
        table = table,
    )
}

/// What: Render the technology management screen.
#[must_use]
pub fn render_technologies(i18n: &I18n, technologies: &[Technology]) -> String {
    let rows = technologies
        .iter()
        .map(|tech| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&tech.name),
                escape_html(&tech.icon_url),
                delete_form(
                    i18n,
                    &format!("/admin/technologies/{}/delete", percent_encode(&tech.id))
                ),
            )
        })
        .collect::<String>();
    let table = if technologies.is_empty() {
        widgets::empty_state(&i18n.t("admin.empty"))
    } else {
        format!(
            "<table>\n<tr><th>{}</th><th>{}</th><th>{}</th></tr>\n{rows}</table>\n",
            escape_html(&i18n.t("admin.table.name")),
            escape_html(&i18n.t("admin.table.icon")),
            escape_html(&i18n.t("admin.table.actions")),
        )
    };

    format!(
        "<h1>{title}</h1>\n\
         <form class=\"inline-form\" method=\"post\" action=\"/admin/technologies\">\n\
         {name_field}{icon_field}\
         <button type=\"submit\">{create}</button>\n\
         </form>\n\
         {table}",
        title = escape_html(&i18n.t("admin.technologies.title")),
        name_field = text_field(i18n, "name", "admin.form.name", true),
        icon_field = text_field(i18n, "icon_url", "admin.form.icon", false),
        create = escape_html(&i18n.t("admin.actions.create")),
        table = table,
    )
}

/// What: Render the post management screen.
///
/// Inputs:
/// - `posts`: Posts after filtering (search and status)
/// - `state`: Current filter state, echoed into the filter bar
///
/// Output:
/// - Filter bar plus a table with status, views and a delete action.
///   Creation happens in the CMS itself, so there is no create form.
#[must_use]
pub fn render_posts(i18n: &I18n, posts: &[&BlogPost], state: &FilterState) -> String {
    let rows = posts
        .iter()
        .map(|post| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&post.title),
                escape_html(&post.category.name),
                widgets::status_badge(i18n, post.published),
                post.views,
                escape_html(&date_display(&post.created_at)),
                delete_form(
                    i18n,
                    &format!("/admin/posts/{}/delete", percent_encode(&post.id))
                ),
            )
        })
        .collect::<String>();
    let table = if posts.is_empty() {
        widgets::empty_state(&i18n.t("admin.empty"))
    } else {
        format!(
            "<table>\n<tr><th>{}</th><th>{}</th><th>{}</th><th>{}</th><th>{}</th><th>{}</th></tr>\n{rows}</table>\n",
            escape_html(&i18n.t("admin.table.title")),
            escape_html(&i18n.t("admin.table.category")),
            escape_html(&i18n.t("admin.table.status")),
            escape_html(&i18n.t("admin.table.views")),
            escape_html(&i18n.t("admin.table.created")),
            escape_html(&i18n.t("admin.table.actions")),
        )
    };

    format!(
        "<h1>{title}</h1>\n{filter_bar}{table}",
        title = escape_html(&i18n.t("admin.posts.title")),
        filter_bar = widgets::filter_bar(i18n, "/admin/posts", state, None, true),
        table = table,
    )
}

/// What: Render the portfolio management screen.
///
/// Inputs:
/// - `items`: Items after filtering (search, category and status)
/// - `categories`: Dropdown options for the filter bar
/// - `state`: Current filter state
///
/// Output:
/// - Filter bar, create form, and a table with publish toggle and delete
///   actions per row.
#[must_use]
pub fn render_portfolio(
    i18n: &I18n,
    items: &[&PortfolioItem],
    categories: &[Category],
    state: &FilterState,
) -> String {
    let rows = items
        .iter()
        .map(|item| {
            let toggle_label = if item.published {
                i18n.t("admin.actions.unpublish")
            } else {
                i18n.t("admin.actions.publish")
            };
            let toggle = format!(
                "<form method=\"post\" action=\"/admin/portfolio/{id}/publish\"><input type=\"hidden\" name=\"publish\" value=\"{target}\"><button type=\"submit\">{label}</button></form>",
                id = percent_encode(&item.id),
                target = !item.published,
                label = escape_html(&toggle_label),
            );
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{} {}</td></tr>\n",
                escape_html(&item.title),
                escape_html(&item.client_name),
                escape_html(&item.category.name),
                widgets::status_badge(i18n, item.published),
                toggle,
                delete_form(
                    i18n,
                    &format!("/admin/portfolio/{}/delete", percent_encode(&item.id))
                ),
            )
        })
        .collect::<String>();
    let table = if items.is_empty() {
        widgets::empty_state(&i18n.t("admin.empty"))
    } else {
        format!(
            "<table>\n<tr><th>{}</th><th>{}</th><th>{}</th><th>{}</th><th>{}</th></tr>\n{rows}</table>\n",
            escape_html(&i18n.t("admin.table.title")),
            escape_html(&i18n.t("admin.table.client")),
            escape_html(&i18n.t("admin.table.category")),
            escape_html(&i18n.t("admin.table.status")),
            escape_html(&i18n.t("admin.table.actions")),
        )
    };

    format!(
        "<h1>{title}</h1>\n\
         {filter_bar}\
         <form class=\"inline-form\" method=\"post\" action=\"/admin/portfolio\">\n\
         {title_field}{client_field}{category_field}{description_field}\
         <button type=\"submit\">{create}</button>\n\
         </form>\n\
         {table}",
        title = escape_html(&i18n.t("admin.portfolio.title")),
        filter_bar = widgets::filter_bar(i18n, "/admin/portfolio", state, Some(categories), true),
        title_field = text_field(i18n, "title", "admin.form.title", true),
        client_field = text_field(i18n, "client_name", "admin.form.client", false),
        category_field = text_field(i18n, "category", "admin.form.category", false),
        description_field = text_field(i18n, "description", "admin.form.description", false),
        create = escape_html(&i18n.t("admin.actions.create")),
        table = table,
    )
}

/// Labeled text input for the create forms.
fn text_field(i18n: &I18n, name: &str, label_key: &str, required: bool) -> String {
    format!(
        "<label>{label}<input type=\"text\" name=\"{name}\"{required}></label>\n",
        label = escape_html(&i18n.t(label_key)),
        name = escape_attr(name),
        required = if required { " required" } else { "" },
    )
}

/// One-button POST form used for row deletion.
fn delete_form(i18n: &I18n, action: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{}\"><button type=\"submit\" class=\"danger\">{}</button></form>",
        escape_attr(action),
        escape_html(&i18n.t("admin.actions.delete")),
    )
}
