//! Landing page: hero plus the three service tiers.

use crate::i18n::I18n;
use crate::util::escape_html;

/// Key suffixes of the service tiers, cheapest first.
const TIERS: [&str; 3] = ["starter", "business", "enterprise"];
/// Feature bullet count per tier; keys are `f1`..`f3`.
const FEATURES_PER_TIER: usize = 3;

/// What: Render the landing page body.
///
/// Inputs:
/// - `i18n`: Translation engine
///
/// Output:
/// - Hero section and pricing grid; all copy comes from the dictionaries,
///   so the page needs no backend fetch.
#[must_use]
pub fn render_home(i18n: &I18n) -> String {
    let mut tiers = String::new();
    for tier in TIERS {
        let mut features = String::new();
        for n in 1..=FEATURES_PER_TIER {
            features.push_str(&format!(
                "<li>{}</li>\n",
                escape_html(&i18n.t(&format!("home.services.{tier}.f{n}")))
            ));
        }
        tiers.push_str(&format!(
            "<div class=\"tier\">\n\
             <h3>{name}</h3>\n\
             <p class=\"price\">{price}</p>\n\
             <p>{tagline}</p>\n\
             <ul>\n{features}</ul>\n\
             <a href=\"/about\">{cta}</a>\n\
             </div>\n",
            name = escape_html(&i18n.t(&format!("home.services.{tier}.name"))),
            price = escape_html(&i18n.t(&format!("home.services.{tier}.price"))),
            tagline = escape_html(&i18n.t(&format!("home.services.{tier}.tagline"))),
            features = features,
            cta = escape_html(&i18n.t("home.services.cta")),
        ));
    }

    format!(
        "<section class=\"hero\">\n\
         <h1>{title}</h1>\n\
         <p>{subtitle}</p>\n\
         <p><a href=\"/portfolio\">{cta}</a></p>\n\
         </section>\n\
         <section>\n\
         <h2>{services_title}</h2>\n\
         <p>{services_subtitle}</p>\n\
         <div class=\"tiers\">\n{tiers}</div>\n\
         </section>\n",
        title = escape_html(&i18n.t("home.hero.title")),
        subtitle = escape_html(&i18n.t("home.hero.subtitle")),
        cta = escape_html(&i18n.t("home.hero.cta")),
        services_title = escape_html(&i18n.t("home.services.title")),
        services_subtitle = escape_html(&i18n.t("home.services.subtitle")),
        tiers = tiers,
    )
}
