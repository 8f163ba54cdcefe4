//! Reusable page fragments.

use crate::i18n::I18n;
use crate::logic::{FilterState, StatusFilter};
use crate::state::Category;
use crate::util::{escape_attr, escape_html};

/// What: Render the standard error panel for a failed backend fetch.
///
/// Inputs:
/// - `i18n`: Translation engine
/// - `message`: Underlying error text, shown literally inside the
///   localized wrapper
/// - `retry_href`: Link target that re-attempts the fetch
///
/// Output:
/// - Panel with a localized heading, the wrapped message and a retry link.
#[must_use]
pub fn error_panel(i18n: &I18n, message: &str, retry_href: &str) -> String {
    format!(
        "<section class=\"error-panel\">\n\
         <h2>{}</h2>\n\
         <p>{}</p>\n\
         <p><a href=\"{}\">{}</a></p>\n\
         </section>\n",
        escape_html(&i18n.t("common.error.title")),
        escape_html(&i18n.t_args("common.error.fetch", &[("message", &message)])),
        escape_attr(retry_href),
        escape_html(&i18n.t("common.actions.retry")),
    )
}

/// Empty-state paragraph for a list with no matching items.
#[must_use]
pub fn empty_state(text: &str) -> String {
    format!("<p class=\"empty-state\">{}</p>\n", escape_html(text))
}

/// Publication status badge.
#[must_use]
pub fn status_badge(i18n: &I18n, published: bool) -> String {
    if published {
        format!(
            "<span class=\"badge published\">{}</span>",
            escape_html(&i18n.t("common.status.published"))
        )
    } else {
        format!(
            "<span class=\"badge\">{}</span>",
            escape_html(&i18n.t("common.status.draft"))
        )
    }
}

/// What: Render a listing filter bar as a GET form.
///
/// Inputs:
/// - `i18n`: Translation engine
/// - `action`: Form action path (the listing page itself)
/// - `state`: Current filter state, echoed into the controls
/// - `categories`: Category options; `None` hides the dropdown
/// - `with_status`: Whether to render the status dropdown
///
/// Output:
/// - Form with search box, optional category and status dropdowns, and a
///   submit button. Submitting re-renders the listing with the query
///   parameters applied.
#[must_use]
pub fn filter_bar(
    i18n: &I18n,
    action: &str,
    state: &FilterState,
    categories: Option<&[Category]>,
    with_status: bool,
) -> String {
    let mut controls = String::new();

    controls.push_str(&format!(
        "<input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"{}\">\n",
        escape_attr(&state.query),
        escape_attr(&i18n.t("common.search.placeholder")),
    ));

    if let Some(categories) = categories {
        let mut options = format!(
            "<option value=\"all\"{}>{}</option>\n",
            selected_attr(state.category == "all"),
            escape_html(&i18n.t("common.category.all")),
        );
        for category in categories {
            options.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>\n",
                escape_attr(&category.slug),
                selected_attr(state.category == category.slug),
                escape_html(&category.name),
            ));
        }
        controls.push_str(&format!("<select name=\"category\">\n{options}</select>\n"));
    }

    if with_status {
        let mut options = String::new();
        for status in [StatusFilter::All, StatusFilter::Published, StatusFilter::Draft] {
            options.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>\n",
                status.as_query(),
                selected_attr(state.status == status),
                escape_html(&i18n.t(status.label_key())),
            ));
        }
        controls.push_str(&format!("<select name=\"status\">\n{options}</select>\n"));
    }

    format!(
        "<form class=\"filter-bar\" method=\"get\" action=\"{}\">\n{controls}<button type=\"submit\">{}</button>\n</form>\n",
        escape_attr(action),
        escape_html(&i18n.t("common.actions.filter")),
    )
}

const fn selected_attr(selected: bool) -> &'static str {
    if selected { " selected" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, TranslationMap};
    use std::collections::HashMap;

    fn i18n() -> I18n {
        let mut en = TranslationMap::new();
        en.insert("common.error.title".into(), "Something went wrong".into());
        en.insert(
            "common.error.fetch".into(),
            "Could not load content: {message}".into(),
        );
        en.insert("common.actions.retry".into(), "Try again".into());
        en.insert("common.actions.filter".into(), "Apply".into());
        en.insert("common.search.placeholder".into(), "Search".into());
        en.insert("common.category.all".into(), "All categories".into());
        en.insert("common.status.all".into(), "Any status".into());
        en.insert("common.status.published".into(), "Published".into());
        en.insert("common.status.draft".into(), "Draft".into());
        let mut tables = HashMap::new();
        tables.insert(Language::En, en);
        tables.insert(Language::Id, TranslationMap::new());
        I18n::new(tables, Language::En)
    }

    #[test]
    /// What: Error panel wraps the literal message in localized copy
    ///
    /// - Input: Error text with HTML-significant characters
    /// - Output: Localized wrapper containing the escaped message
    fn widgets_error_panel_wraps_message() {
        let html = error_panel(&i18n(), "GET /api/posts failed: 502 <bad>", "/blog");
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("Could not load content: GET /api/posts failed: 502 &lt;bad&gt;"));
        assert!(html.contains("href=\"/blog\""));
    }

    #[test]
    /// What: Filter bar echoes state and marks selections
    ///
    /// - Input: State with query, category and status set
    /// - Output: Search value echoed, matching options selected
    fn widgets_filter_bar_echoes_state() {
        let state = FilterState::from_params("laravel", "branding", "draft");
        let categories = vec![
            Category {
                name: "Branding".into(),
                slug: "branding".into(),
            },
            Category {
                name: "Web Development".into(),
                slug: "web-development".into(),
            },
        ];
        let html = filter_bar(&i18n(), "/blog", &state, Some(&categories), true);
        assert!(html.contains("value=\"laravel\""));
        assert!(html.contains("<option value=\"branding\" selected>"));
        assert!(html.contains("<option value=\"draft\" selected>"));
        assert!(!html.contains("<option value=\"all\" selected>"));
    }

    #[test]
    /// What: Dropdowns are omitted when not requested
    ///
    /// - Input: No categories, status disabled
    /// - Output: Only the search box and submit button
    fn widgets_filter_bar_minimal() {
        let html = filter_bar(&i18n(), "/blog", &FilterState::default(), None, false);
        assert!(!html.contains("<select"));
        assert!(html.contains("type=\"search\""));
    }
}
