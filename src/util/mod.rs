//! Small utility helpers for HTML escaping, URL encoding, and date
//! formatting.
//!
//! The functions in this module are intentionally lightweight and
//! dependency-light to keep rendering paths fast. They are used by the
//! sources, ui, and server code.

use std::fmt::Write;

/// What: Escape HTML special characters for text content.
///
/// Inputs:
/// - `text`: Raw string to escape.
///
/// Output:
/// - String safe to embed between HTML tags.
///
/// Details:
/// - Replaces `&`, `<`, `>`, `"` and `'` with their entity forms.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// What: Escape a string for use inside an HTML attribute value.
///
/// Inputs:
/// - `text`: Raw string to escape.
///
/// Output:
/// - String safe to embed inside double-quoted attributes.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Format an RFC 3339 timestamp from the CMS into a short display date.
///
/// Inputs:
/// - `raw`: Timestamp string as delivered by the API (may be empty or malformed).
///
/// Output:
/// - Returns `"DD Mon YYYY"` on success, or the raw input when parsing fails.
///
/// Details:
/// - Content records carry ISO timestamps; anything unparseable is shown
///   verbatim rather than dropped so admins can spot bad data.
#[must_use]
pub fn date_display(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: HTML escaping covers all five special characters
    ///
    /// - Input: String with markup characters
    /// - Output: Entity-encoded string
    fn util_escape_html_entities() {
        assert_eq!(
            escape_html("<a href=\"x\">&'"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape_attr("plain"), "plain");
    }

    #[test]
    /// What: Percent-encoding leaves unreserved characters and escapes the rest
    ///
    /// - Input: Mixed ASCII string with spaces and slashes
    /// - Output: RFC 3986 encoded string
    fn util_percent_encode_reserved() {
        assert_eq!(percent_encode("web-app v2"), "web-app%20v2");
        assert_eq!(percent_encode("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(percent_encode("safe-._~"), "safe-._~");
    }

    #[test]
    /// What: Date formatting renders RFC 3339 input and passes through garbage
    ///
    /// - Input: Valid ISO timestamp and a malformed string
    /// - Output: Short display date; raw string on parse failure
    fn util_date_display_formats() {
        assert_eq!(date_display("2026-03-14T09:26:00+07:00"), "14 Mar 2026");
        assert_eq!(date_display("not-a-date"), "not-a-date");
        assert_eq!(date_display(""), "");
    }
}
