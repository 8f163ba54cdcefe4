//! Application runtime: configuration, shared state assembly, and the
//! HTTP server lifecycle.
//!
//! This module wires everything together so the binary entrypoint stays
//! minimal.

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::args::Args;
use crate::i18n::I18n;
use crate::server;
use crate::settings::{self, SettingsStore};
use crate::sources::ApiClient;
use crate::state::SiteState;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Assemble shared state from configuration and serve the site.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - `Ok(())` when the server loop ends; bind and serve failures
///   propagate to the caller.
///
/// Details:
/// - Settings load first so the persisted language is active before the
///   translation engine spins up; the first render after a restart is
///   already in the visitor's last chosen language. The host locale is
///   never consulted.
///
/// # Errors
/// - Binding the listen address or serving connections failed.
pub async fn run(args: Args) -> Result<()> {
    let config_dir = settings::resolve_config_dir(args.config_dir.as_deref().map(Path::new));
    tracing::info!(
        config_dir = %config_dir.display(),
        api = %args.api_base,
        "assembling site state"
    );

    let store = Arc::new(SettingsStore::load_or_init(settings::settings_path(
        &config_dir,
    )));
    let language = store.get().language;

    let locales = settings::locales_dir(&config_dir);
    let i18n = Arc::new(I18n::load(locales.as_deref(), language));
    tracing::info!(language = language.code(), "translations loaded");

    let api = ApiClient::new(&args.api_base);
    let state = SiteState::with_system_clock(api, i18n, store);

    let app = server::router(state);
    let listener = TcpListener::bind(&args.bind).await?;
    tracing::info!(addr = %args.bind, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
