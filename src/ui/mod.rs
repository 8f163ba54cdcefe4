//! Server-side HTML rendering.
//!
//! Pages are plain strings assembled with `format!`; there is no template
//! engine. Every dynamic value goes through the escape helpers in
//! [`crate::util`] except CMS-authored article bodies, which are trusted
//! HTML by construction.

pub mod pages;
pub mod widgets;

use crate::i18n::{I18n, Language};
use crate::util::{escape_attr, escape_html};

/// Navigation sections, in header order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    /// Landing page.
    Home,
    /// Blog listing and details.
    Blog,
    /// Portfolio listing and details.
    Portfolio,
    /// Company/about page.
    About,
    /// Management screens.
    Admin,
    /// Pages outside the main navigation (errors, fallbacks).
    None,
}

impl NavSection {
    const ALL: [Self; 5] = [
        Self::Home,
        Self::Blog,
        Self::Portfolio,
        Self::About,
        Self::Admin,
    ];

    const fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Blog => "/blog",
            Self::Portfolio => "/portfolio",
            Self::About => "/about",
            Self::Admin | Self::None => "/admin",
        }
    }

    const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Blog => "nav.blog",
            Self::Portfolio => "nav.portfolio",
            Self::About => "nav.about",
            Self::Admin | Self::None => "nav.admin",
        }
    }
}

/// Per-request rendering context shared by the shell and the pages.
pub struct Chrome<'a> {
    /// Translation engine for the active language.
    pub i18n: &'a I18n,
    /// Active language, for `<html lang>` and the switcher buttons.
    pub language: Language,
    /// Whether the dark scheme is active.
    pub dark_mode: bool,
    /// Whether a language transition is in flight; dims the page and
    /// disables the switcher buttons for its duration.
    pub language_changing: bool,
    /// Section to highlight in the header.
    pub active: NavSection,
    /// Current path (with query) used as the post-redirect target of the
    /// preference forms.
    pub current_path: &'a str,
}

/// What: Wrap a rendered page body in the full HTML document shell.
///
/// Inputs:
/// - `chrome`: Request rendering context
/// - `title`: Page title (plain text, escaped here)
/// - `body`: Rendered `<main>` content, already escaped by the caller
///
/// Output:
/// - Complete HTML document with header, navigation, preference controls
///   and footer.
#[must_use]
pub fn render_shell(chrome: &Chrome<'_>, title: &str, body: &str) -> String {
    let i18n = chrome.i18n;
    let mut body_classes = Vec::new();
    if chrome.dark_mode {
        body_classes.push("dark");
    }
    if chrome.language_changing {
        body_classes.push("lang-changing");
    }

    let nav = NavSection::ALL
        .iter()
        .map(|section| {
            let current = if *section == chrome.active {
                " aria-current=\"page\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\"{current}>{}</a>",
                section.href(),
                escape_html(&i18n.t(section.label_key()))
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        "<!doctype html>\n\
         <html lang=\"{lang}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} · {site}</title>\n\
         <style>{style}</style>\n\
         </head>\n\
         <body class=\"{body_classes}\">\n\
         <header>\n\
           <a class=\"brand\" href=\"/\">{site}</a>\n\
           <nav>\n        {nav}\n      </nav>\n\
           <div class=\"prefs\">\n{theme_form}{lang_forms}</div>\n\
         </header>\n\
         <main>\n{body}\n</main>\n\
         <footer><p>{footer}</p></footer>\n\
         </body>\n\
         </html>\n",
        lang = chrome.language.code(),
        title = escape_html(title),
        site = escape_html(&i18n.t("site.name")),
        style = STYLESHEET,
        body_classes = body_classes.join(" "),
        nav = nav,
        theme_form = theme_toggle_form(chrome),
        lang_forms = language_switch_forms(chrome),
        body = body,
        footer = escape_html(&i18n.t_args("footer.rights", &[("year", &current_year())])),
    )
}

/// Theme toggle as a one-button POST form.
fn theme_toggle_form(chrome: &Chrome<'_>) -> String {
    let label_key = if chrome.dark_mode {
        "theme.switch_light"
    } else {
        "theme.switch_dark"
    };
    format!(
        "<form method=\"post\" action=\"/settings/theme\"><input type=\"hidden\" name=\"next\" value=\"{}\"><button type=\"submit\">{}</button></form>\n",
        escape_attr(chrome.current_path),
        escape_html(&chrome.i18n.t(label_key)),
    )
}

/// One POST form per language; the active one renders disabled.
fn language_switch_forms(chrome: &Chrome<'_>) -> String {
    Language::ALL
        .iter()
        .map(|lang| {
            let disabled = if *lang == chrome.language || chrome.language_changing {
                " disabled"
            } else {
                ""
            };
            format!(
                "<form method=\"post\" action=\"/settings/language\"><input type=\"hidden\" name=\"lang\" value=\"{code}\"><input type=\"hidden\" name=\"next\" value=\"{next}\"><button type=\"submit\" class=\"lang-btn\"{disabled} title=\"{title}\">{label}</button></form>\n",
                code = lang.code(),
                next = escape_attr(chrome.current_path),
                disabled = disabled,
                title = escape_attr(lang.native_name()),
                label = lang.code().to_uppercase(),
            )
        })
        .collect::<String>()
}

fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

/// Inline stylesheet; the site ships no static assets.
const STYLESHEET: &str = "\
:root{--bg:#f7f8fa;--fg:#17202a;--muted:#5d6d7e;--card:#ffffff;--line:#dfe4ea;--accent:#0f766e}\
body.dark{--bg:#101418;--fg:#e8edf2;--muted:#93a3b3;--card:#1a2026;--line:#2a323b;--accent:#2dd4bf}\
*{box-sizing:border-box}\
body{margin:0;font-family:system-ui,sans-serif;background:var(--bg);color:var(--fg)}\
header{display:flex;align-items:center;gap:1.5rem;padding:.8rem 1.2rem;border-bottom:1px solid var(--line)}\
header .brand{font-weight:700;font-size:1.15rem;color:var(--accent);text-decoration:none}\
header nav{display:flex;gap:1rem;flex:1}\
header nav a{color:var(--fg);text-decoration:none}\
header nav a[aria-current=page]{color:var(--accent);font-weight:600}\
.prefs{display:flex;gap:.4rem}\
.prefs form{display:inline}\
main{max-width:64rem;margin:0 auto;padding:1.5rem 1.2rem;transition:opacity .15s ease}\
body.lang-changing main{opacity:.4}\
body.lang-changing .lang-btn{pointer-events:none}\
footer{padding:1.2rem;text-align:center;color:var(--muted);border-top:1px solid var(--line)}\
h1{margin-top:0}\
a{color:var(--accent)}\
.hero{padding:2.5rem 0;text-align:center}\
.hero p{color:var(--muted);max-width:38rem;margin:.8rem auto}\
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1rem;margin:1.2rem 0}\
.card{background:var(--card);border:1px solid var(--line);border-radius:.6rem;padding:1rem}\
.card h3{margin:.2rem 0}\
.card img{width:100%;border-radius:.4rem}\
.card .meta{color:var(--muted);font-size:.85rem;display:flex;gap:.8rem;flex-wrap:wrap}\
.badge{display:inline-block;padding:.1rem .5rem;border:1px solid var(--line);border-radius:1rem;font-size:.78rem;color:var(--muted)}\
.badge.published{border-color:var(--accent);color:var(--accent)}\
.featured{color:#d4a017}\
.filter-bar{display:flex;gap:.6rem;flex-wrap:wrap;margin:1rem 0}\
.filter-bar input[type=search]{flex:1;min-width:12rem;padding:.45rem .6rem;border:1px solid var(--line);border-radius:.4rem;background:var(--card);color:var(--fg)}\
.filter-bar select,.filter-bar button,.prefs button{padding:.45rem .7rem;border:1px solid var(--line);border-radius:.4rem;background:var(--card);color:var(--fg);cursor:pointer}\
.error-panel{border:1px solid #c0392b;border-radius:.6rem;padding:1.2rem;background:var(--card)}\
.error-panel h2{color:#c0392b;margin-top:0}\
.empty-state{color:var(--muted);padding:2rem 0;text-align:center}\
table{width:100%;border-collapse:collapse;background:var(--card)}\
th,td{text-align:left;padding:.55rem .7rem;border-bottom:1px solid var(--line)}\
th{color:var(--muted);font-weight:600;font-size:.85rem}\
td form{display:inline}\
.inline-form{display:flex;gap:.6rem;flex-wrap:wrap;margin:1rem 0;align-items:end}\
.inline-form label{display:flex;flex-direction:column;gap:.2rem;font-size:.85rem;color:var(--muted)}\
.inline-form input{padding:.45rem .6rem;border:1px solid var(--line);border-radius:.4rem;background:var(--bg);color:var(--fg)}\
.inline-form button,td button{padding:.4rem .7rem;border:1px solid var(--accent);border-radius:.4rem;background:var(--accent);color:#fff;cursor:pointer}\
td button.danger{background:transparent;color:#c0392b;border-color:#c0392b}\
.tiers{display:grid;grid-template-columns:repeat(auto-fit,minmax(15rem,1fr));gap:1rem}\
.tier{background:var(--card);border:1px solid var(--line);border-radius:.6rem;padding:1.2rem}\
.tier .price{font-size:1.6rem;font-weight:700;color:var(--accent)}\
.tier ul{padding-left:1.1rem;color:var(--muted)}\
.team{display:grid;grid-template-columns:repeat(auto-fill,minmax(12rem,1fr));gap:1rem}\
article.post-body{line-height:1.65}\
.dashboard-links{display:grid;grid-template-columns:repeat(auto-fill,minmax(14rem,1fr));gap:1rem}\
";
