//! Blog listing and article pages.

use crate::i18n::I18n;
use crate::logic::FilterState;
use crate::state::{BlogPost, Category};
use crate::ui::widgets;
use crate::util::{date_display, escape_html, percent_encode};

/// What: Render the blog listing body.
///
/// Inputs:
/// - `i18n`: Translation engine
/// - `posts`: Posts after filtering, in backend order
/// - `categories`: Dropdown options (derived from the unfiltered list)
/// - `state`: Current filter state, echoed into the filter bar
///
/// Output:
/// - Heading, filter bar and card grid; an empty state replaces the grid
///   when nothing matched.
#[must_use]
pub fn render_index(
    i18n: &I18n,
    posts: &[&BlogPost],
    categories: &[Category],
    state: &FilterState,
) -> String {
    let list = if posts.is_empty() {
        widgets::empty_state(&i18n.t("blog.empty"))
    } else {
        let cards = posts.iter().map(|post| card(i18n, post)).collect::<String>();
        format!("<div class=\"cards\">\n{cards}</div>\n")
    };

    format!(
        "<h1>{title}</h1>\n\
         <p>{subtitle}</p>\n\
         {filter_bar}\
         {list}",
        title = escape_html(&i18n.t("blog.title")),
        subtitle = escape_html(&i18n.t("blog.subtitle")),
        filter_bar = widgets::filter_bar(i18n, "/blog", state, Some(categories), false),
        list = list,
    )
}

fn card(i18n: &I18n, post: &BlogPost) -> String {
    let featured = if post.featured {
        "<span class=\"featured\">&#9733;</span> "
    } else {
        ""
    };
    format!(
        "<div class=\"card\">\n\
         <h3>{featured}<a href=\"/blog/{slug}\">{title}</a></h3>\n\
         <p>{excerpt}</p>\n\
         <p><span class=\"badge\">{category}</span></p>\n\
         <p class=\"meta\"><span>{date}</span><span>{views}</span></p>\n\
         </div>\n",
        featured = featured,
        slug = percent_encode(&post.slug),
        title = escape_html(&post.title),
        excerpt = escape_html(&post.excerpt),
        category = escape_html(&post.category.name),
        date = escape_html(&date_display(&post.created_at)),
        views = escape_html(&i18n.t_args("common.views", &[("count", &post.views)])),
    )
}

/// What: Render a full article body.
///
/// Inputs:
/// - `i18n`: Translation engine
/// - `post`: The article to render
///
/// Output:
/// - Title, byline metadata and the article content. The content is
///   CMS-authored HTML and is inserted unescaped.
#[must_use]
pub fn render_detail(i18n: &I18n, post: &BlogPost) -> String {
    let byline = if post.author_name.is_empty() {
        String::new()
    } else {
        format!(
            "<span>{}</span>",
            escape_html(&i18n.t_args("blog.byline", &[("name", &post.author_name)]))
        )
    };
    format!(
        "<article>\n\
         <h1>{title}</h1>\n\
         <p class=\"meta\">{byline}<span>{date}</span><span class=\"badge\">{category}</span><span>{views}</span></p>\n\
         <div class=\"post-body\">{content}</div>\n\
         <p><a href=\"/blog\">{back}</a></p>\n\
         </article>\n",
        title = escape_html(&post.title),
        byline = byline,
        date = escape_html(&date_display(&post.created_at)),
        category = escape_html(&post.category.name),
        views = escape_html(&i18n.t_args("common.views", &[("count", &post.views)])),
        content = post.content,
        back = escape_html(&i18n.t("common.actions.back")),
    )
}
