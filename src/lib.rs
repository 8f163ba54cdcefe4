//! Library entry for Bajraweb exposing core logic for integration tests.

pub mod i18n;
pub mod logic;
pub mod server;
pub mod settings;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
