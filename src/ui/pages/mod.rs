//! Per-page body renderers.
//!
//! Each function returns the `<main>` content only; the handlers wrap it
//! in the document shell from [`crate::ui::render_shell`].

pub mod about;
pub mod admin;
pub mod blog;
pub mod home;
pub mod portfolio;
