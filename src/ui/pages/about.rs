//! About page: company story plus the team grid.

use crate::i18n::I18n;
use crate::state::TeamMember;
use crate::ui::widgets;
use crate::util::{escape_attr, escape_html};

/// What: Render the about page body.
///
/// Inputs:
/// - `i18n`: Translation engine
/// - `team`: Team member fetch outcome; `Err` carries the error text
///
/// Output:
/// - Story section (static localized copy) plus the team section, which
///   degrades to an inline error panel when the fetch failed.
#[must_use]
pub fn render_about(i18n: &I18n, team: Result<&[TeamMember], &str>) -> String {
    let team_section = match team {
        Ok([]) => widgets::empty_state(&i18n.t("about.team.empty")),
        Ok(members) => {
            let cards = members
                .iter()
                .map(|member| {
                    let photo = if member.photo_url.is_empty() {
                        String::new()
                    } else {
                        format!(
                            "<img src=\"{}\" alt=\"{}\">\n",
                            escape_attr(&member.photo_url),
                            escape_attr(&member.name),
                        )
                    };
                    format!(
                        "<div class=\"card\">\n{photo}<h3>{}</h3>\n<p class=\"meta\">{}</p>\n</div>\n",
                        escape_html(&member.name),
                        escape_html(&member.role),
                    )
                })
                .collect::<String>();
            format!("<div class=\"team\">\n{cards}</div>\n")
        }
        Err(message) => widgets::error_panel(i18n, message, "/about"),
    };

    format!(
        "<h1>{title}</h1>\n\
         <p>{p1}</p>\n\
         <p>{p2}</p>\n\
         <section>\n\
         <h2>{team_title}</h2>\n\
         {team_section}\
         </section>\n",
        title = escape_html(&i18n.t("about.title")),
        p1 = escape_html(&i18n.t("about.story.p1")),
        p2 = escape_html(&i18n.t("about.story.p2")),
        team_title = escape_html(&i18n.t("about.team.title")),
        team_section = team_section,
    )
}
