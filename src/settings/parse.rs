//! `settings.conf` parsing and rendering.
//!
//! The file is a flat `key = value` list. Unknown keys are ignored so a
//! file written by a newer build still loads; unknown values fall back to
//! defaults with a warning instead of failing startup.

use crate::i18n::Language;
use crate::settings::types::Settings;

/// What: Parse `settings.conf` content into a `Settings` value.
///
/// Inputs:
/// - `content`: Full file content
///
/// Output:
/// - Parsed settings; any unparseable entry keeps its default.
///
/// Details:
/// - Lines starting with `#` or `//` are comments; inline comments after
///   a value are stripped.
/// - Keys are case-insensitive and tolerate `.`/`-`/space in place of `_`.
/// - An unknown language value logs a warning and keeps the default, so a
///   hand-edited file can never select a language the site cannot render.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        if !trimmed.contains('=') {
            continue;
        }
        let mut parts = trimmed.splitn(2, '=');
        let raw_key = parts.next().unwrap_or("");
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val_raw = parts.next().unwrap_or("").trim();
        let val = strip_inline_comment(val_raw);
        match key.as_str() {
            "language" | "locale" | "lang" => match Language::from_code(val) {
                Some(lang) => settings.language = lang,
                None => {
                    tracing::warn!(value = val, "unknown language in settings; keeping default");
                }
            },
            "dark_mode" | "darkmode" | "dark" | "theme_dark" => {
                settings.dark_mode = parse_bool(val);
            }
            _ => {}
        }
    }
    settings
}

/// What: Render settings back into `settings.conf` content.
///
/// Inputs:
/// - `settings`: Values to persist
///
/// Output:
/// - Commented skeleton with the current values filled in, suitable both
///   for first-run creation and for rewriting after a change.
#[must_use]
pub fn render_settings(settings: &Settings) -> String {
    format!(
        "# Bajramedia site preferences\n\
         # Values are read at startup and rewritten when changed from the UI.\n\
         \n\
         # UI language: en | id\n\
         language = {}\n\
         \n\
         # Dark mode: true | false\n\
         dark_mode = {}\n",
        settings.language.code(),
        settings.dark_mode
    )
}

/// Accepts the usual truthy spellings; everything else is `false`.
fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Drop a trailing `//` or `#` comment from a value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`
///
/// Output:
/// - Value with any inline comment removed and whitespace trimmed.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i) = s.find('#') {
        s = &s[..i];
    }
    s.trim()
}
