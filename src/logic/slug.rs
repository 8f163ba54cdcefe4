//! Slug normalization and lenient category matching.

use crate::state::Category;

/// What: Normalize a display name into a URL-safe slug.
///
/// Inputs:
/// - `name`: Arbitrary display text (e.g. "Web Development")
///
/// Output:
/// - Lowercased string with every run of non-alphanumeric characters
///   collapsed to a single hyphen and no leading/trailing hyphen.
///
/// Details:
/// - Unicode letters and digits are kept (lowercased); everything else
///   counts as a separator.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out
}

/// What: Decide whether a content category matches a selected category slug.
///
/// Inputs:
/// - `category`: Normalized category of a content item
/// - `selected_slug`: Slug chosen in the filter bar (already lowercase by convention)
///
/// Output:
/// - `true` when any of the three match heuristics accepts the pair.
///
/// Details:
/// - Heuristics run in order and short-circuit:
///   1. exact slug equality (stored slug or the slugified name),
///   2. substring containment after stripping hyphens from both sides,
///   3. substring containment of the space-to-hyphen converted name.
/// - The chain is deliberately lenient so that "Web Development",
///   "web-development" and "webdevelopment" all land in the same bucket;
///   backend category naming has historically been inconsistent.
/// - An empty or "all" selection matches everything.
#[must_use]
pub fn category_matches(category: &Category, selected_slug: &str) -> bool {
    let selected = selected_slug.trim().to_lowercase();
    if selected.is_empty() || selected == "all" {
        return true;
    }

    let name_slug = slugify(&category.name);
    if category.slug == selected || name_slug == selected {
        return true;
    }

    let compact_name = name_slug.replace('-', "");
    let compact_selected = selected.replace('-', "");
    if !compact_selected.is_empty() && compact_name.contains(&compact_selected) {
        return true;
    }

    category
        .name
        .to_lowercase()
        .replace(' ', "-")
        .contains(&selected)
}
