//! Portfolio listing and case-study pages.

use crate::i18n::I18n;
use crate::logic::FilterState;
use crate::state::{Category, PortfolioItem};
use crate::ui::widgets;
use crate::util::{date_display, escape_attr, escape_html, percent_encode};

/// What: Render the portfolio listing body.
///
/// Inputs:
/// - `i18n`: Translation engine
/// - `items`: Items after filtering, in backend order
/// - `categories`: Dropdown options from the category endpoint; empty
///   when that fetch degraded
/// - `state`: Current filter state
///
/// Output:
/// - Heading, filter bar and card grid, or an empty state.
#[must_use]
pub fn render_index(
    i18n: &I18n,
    items: &[&PortfolioItem],
    categories: &[Category],
    state: &FilterState,
) -> String {
    let list = if items.is_empty() {
        widgets::empty_state(&i18n.t("portfolio.empty"))
    } else {
        let cards = items.iter().map(|item| card(i18n, item)).collect::<String>();
        format!("<div class=\"cards\">\n{cards}</div>\n")
    };

    format!(
        "<h1>{title}</h1>\n\
         <p>{subtitle}</p>\n\
         {filter_bar}\
         {list}",
        title = escape_html(&i18n.t("portfolio.title")),
        subtitle = escape_html(&i18n.t("portfolio.subtitle")),
        filter_bar = widgets::filter_bar(i18n, "/portfolio", state, Some(categories), false),
        list = list,
    )
}

fn card(i18n: &I18n, item: &PortfolioItem) -> String {
    let image = if item.image_url.is_empty() {
        String::new()
    } else {
        format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape_attr(&item.image_url),
            escape_attr(&item.title),
        )
    };
    format!(
        "<div class=\"card\">\n\
         {image}\
         <h3><a href=\"/portfolio/{slug}\">{title}</a></h3>\n\
         <p class=\"meta\">{client}</p>\n\
         <p><span class=\"badge\">{category}</span></p>\n\
         </div>\n",
        image = image,
        slug = percent_encode(&item.slug),
        title = escape_html(&item.title),
        client = escape_html(&i18n.t_args("portfolio.client", &[("name", &item.client_name)])),
        category = escape_html(&item.category.name),
    )
}

/// What: Render a case-study body.
///
/// Inputs:
/// - `i18n`: Translation engine
/// - `item`: The portfolio item to render
///
/// Output:
/// - Title, client and category metadata, cover image and description.
#[must_use]
pub fn render_detail(i18n: &I18n, item: &PortfolioItem) -> String {
    let image = if item.image_url.is_empty() {
        String::new()
    } else {
        format!(
            "<p><img src=\"{}\" alt=\"{}\"></p>\n",
            escape_attr(&item.image_url),
            escape_attr(&item.title),
        )
    };
    format!(
        "<article>\n\
         <h1>{title}</h1>\n\
         <p class=\"meta\"><span>{client}</span><span class=\"badge\">{category}</span><span>{date}</span></p>\n\
         {image}\
         <p>{description}</p>\n\
         <p><a href=\"/portfolio\">{back}</a></p>\n\
         </article>\n",
        title = escape_html(&item.title),
        client = escape_html(&i18n.t_args("portfolio.client", &[("name", &item.client_name)])),
        category = escape_html(&item.category.name),
        date = escape_html(&date_display(&item.created_at)),
        image = image,
        description = escape_html(&item.description),
        back = escape_html(&i18n.t("common.actions.back")),
    )
}
