//! Translation map and lookup utilities.

use std::collections::HashMap;
use std::fmt;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a translation in the translation map.
///
/// Inputs:
/// - `key`: Dot-notation key (e.g., "blog.title")
/// - `translations`: Translation map to search
///
/// Output:
/// - `Option<String>` containing the translation or None if not found
#[must_use]
pub fn translate(key: &str, translations: &TranslationMap) -> Option<String> {
    translations.get(key).cloned()
}

/// What: Replace named `{placeholder}` markers in a translated string.
///
/// Inputs:
/// - `template`: Translated string possibly containing `{name}` markers
/// - `args`: Name/value pairs to substitute
///
/// Output:
/// - String with every matching marker replaced by the rendered value.
///
/// Details:
/// - Markers with no matching argument are left untouched, so a stale
///   dictionary entry degrades visibly instead of panicking.
/// - Every occurrence of a marker is replaced, not just the first.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        let marker = format!("{{{name}}}");
        if out.contains(marker.as_str()) {
            out = out.replace(marker.as_str(), &value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let mut translations = HashMap::new();
        translations.insert("blog.title".to_string(), "Blog".to_string());

        assert_eq!(
            translate("blog.title", &translations),
            Some("Blog".to_string())
        );
        assert_eq!(translate("blog.subtitle", &translations), None);
    }

    #[test]
    fn test_interpolate_named_markers() {
        let out = interpolate(
            "Could not load content: {message}",
            &[("message", &"timeout" as &dyn std::fmt::Display)],
        );
        assert_eq!(out, "Could not load content: timeout");
    }

    #[test]
    fn test_interpolate_repeated_and_unknown_markers() {
        let count: u64 = 3;
        let out = interpolate(
            "{count} of {count} ({other})",
            &[("count", &count as &dyn std::fmt::Display)],
        );
        assert_eq!(out, "3 of 3 ({other})");
    }

    #[test]
    fn test_interpolate_no_markers() {
        let out = interpolate("plain text", &[("message", &"x" as &dyn std::fmt::Display)]);
        assert_eq!(out, "plain text");
    }
}
