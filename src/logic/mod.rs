//! Pure content-shaping logic shared by the page handlers.

pub mod filter;
pub mod slug;

// Re-export public APIs to preserve existing import paths (crate::logic::...)
pub use filter::{
    FilterState, Filterable, StatusFilter, apply_filters, distinct_categories, filter_by_category,
    filter_by_search, filter_by_status,
};
pub use slug::{category_matches, slugify};
