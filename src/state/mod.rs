//! Shared state: content value types plus the per-process handler state.
//!
//! Split into small files; the public API stays flat under
//! `crate::state::*` via re-exports.

pub mod app_state;
pub mod types;

// Public re-exports to keep existing paths working
pub use app_state::SiteState;
pub use types::{Author, BlogPost, Category, PortfolioItem, TeamMember, Technology};
