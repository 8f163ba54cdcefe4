//! Category, status and free-text filtering over fetched content lists.

use crate::logic::slug::category_matches;
use crate::state::Category;

/// Publication-status facet of the filter bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep every item regardless of status.
    #[default]
    All,
    /// Keep only published items.
    Published,
    /// Keep only drafts.
    Draft,
}

impl StatusFilter {
    /// What: Parse the `status` query parameter into a filter value.
    ///
    /// Inputs:
    /// - `raw`: Query-string value, any case
    ///
    /// Output:
    /// - `Published`/`Draft` for the known values, `All` for everything else.
    #[must_use]
    pub fn from_query(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "published" => Self::Published,
            "draft" => Self::Draft,
            _ => Self::All,
        }
    }

    /// Canonical query-string value for this filter.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }

    /// Translation key for the filter's display label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::All => "common.status.all",
            Self::Published => "common.status.published",
            Self::Draft => "common.status.draft",
        }
    }

    /// Whether an item with the given published flag passes this filter.
    #[must_use]
    pub const fn matches(self, published: bool) -> bool {
        match self {
            Self::All => true,
            Self::Published => published,
            Self::Draft => !published,
        }
    }
}

/// Current state of a listing filter bar.
///
/// `query` keeps the raw user input so the search box can echo it back;
/// trimming and case folding happen at comparison time only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Raw free-text search input.
    pub query: String,
    /// Selected category slug; `"all"` selects every category.
    pub category: String,
    /// Selected publication status.
    pub status: StatusFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: "all".to_string(),
            status: StatusFilter::All,
        }
    }
}

impl FilterState {
    /// What: Build a filter state from raw query-string parameters.
    ///
    /// Inputs:
    /// - `query`: `q` parameter as received
    /// - `category`: `category` parameter; empty means "all"
    /// - `status`: `status` parameter; unknown values mean "all"
    ///
    /// Output:
    /// - Normalized `FilterState` (category lowercased and trimmed).
    #[must_use]
    pub fn from_params(query: &str, category: &str, status: &str) -> Self {
        let category = category.trim().to_lowercase();
        Self {
            query: query.to_string(),
            category: if category.is_empty() {
                "all".to_string()
            } else {
                category
            },
            status: StatusFilter::from_query(status),
        }
    }

    /// Whether every facet is in its neutral position.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.query.trim().is_empty()
            && self.category == "all"
            && self.status == StatusFilter::All
    }
}

/// Behaviour a content item must expose to flow through the filter pipeline.
pub trait Filterable {
    /// Normalized category of the item.
    fn category(&self) -> &Category;
    /// Publication flag of the item.
    fn published(&self) -> bool;
    /// Text fields the free-text search looks at, in display priority order.
    fn search_haystacks(&self) -> Vec<&str>;
}

/// What: Keep items whose category matches the selected slug.
///
/// Inputs:
/// - `items`: Borrowed items in display order
/// - `selected`: Category slug from the filter bar
///
/// Output:
/// - The matching subsequence, order preserved; everything when the
///   selection is neutral.
#[must_use]
pub fn filter_by_category<'a, T: Filterable>(items: Vec<&'a T>, selected: &str) -> Vec<&'a T> {
    let trimmed = selected.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return items;
    }
    items
        .into_iter()
        .filter(|item| category_matches(item.category(), trimmed))
        .collect()
}

/// What: Keep items whose publication flag passes the status filter.
#[must_use]
pub fn filter_by_status<T: Filterable>(items: Vec<&T>, status: StatusFilter) -> Vec<&T> {
    if status == StatusFilter::All {
        return items;
    }
    items
        .into_iter()
        .filter(|item| status.matches(item.published()))
        .collect()
}

/// What: Keep items whose haystack fields contain the search needle.
///
/// Inputs:
/// - `items`: Borrowed items in display order
/// - `query`: Raw search input
///
/// Output:
/// - Items where any haystack contains the trimmed, lowercased needle;
///   everything when the needle is empty.
#[must_use]
pub fn filter_by_search<'a, T: Filterable>(items: Vec<&'a T>, query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| {
            item.search_haystacks()
                .iter()
                .any(|hay| hay.to_lowercase().contains(&needle))
        })
        .collect()
}

/// What: Run the full filter pipeline over a fetched content list.
///
/// Inputs:
/// - `items`: Fetched items in backend order
/// - `state`: Current filter bar state
///
/// Output:
/// - Borrowed subsequence of `items` after category, then status, then
///   search filtering; relative order is never changed.
///
/// Details:
/// - The stage order is fixed; each stage only ever narrows the list, so
///   a neutral `state` returns the input list unchanged.
#[must_use]
pub fn apply_filters<'a, T: Filterable>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let all: Vec<&T> = items.iter().collect();
    let by_category = filter_by_category(all, &state.category);
    let by_status = filter_by_status(by_category, state.status);
    filter_by_search(by_status, &state.query)
}

/// What: Collect the distinct categories of a content list, first-seen order.
///
/// Inputs:
/// - `items`: Fetched items in backend order
///
/// Output:
/// - One `Category` per distinct slug, ordered by first appearance;
///   items without a slug are skipped.
///
/// Details:
/// - Feeds the category dropdown on listings whose backend has no
///   dedicated category endpoint.
#[must_use]
pub fn distinct_categories<T: Filterable>(items: &[T]) -> Vec<Category> {
    let mut seen: Vec<String> = Vec::new();
    let mut out: Vec<Category> = Vec::new();
    for item in items {
        let cat = item.category();
        if cat.slug.is_empty() || seen.iter().any(|s| *s == cat.slug) {
            continue;
        }
        seen.push(cat.slug.clone());
        out.push(cat.clone());
    }
    out
}
