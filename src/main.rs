//! Bajraweb binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod i18n;
mod logic;
mod server;
mod settings;
mod sources;
mod state;
mod ui;
mod util;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

struct SiteTimer;

impl tracing_subscriber::fmt::time::FormatTime for SiteTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing to `<config>/logs/bajraweb.log`, falling back to
/// stderr when the file cannot be opened.
fn init_logging(config_dir: &std::path::Path, log_level: &str) {
    let mut log_path = settings::logs_dir(config_dir);
    log_path.push("bajraweb.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(SiteTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(true)
                .with_timer(SiteTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    let config_dir =
        settings::resolve_config_dir(args.config_dir.as_deref().map(std::path::Path::new));
    init_logging(&config_dir, &args.log_level);

    tracing::info!(bind = %args.bind, "Bajraweb starting");
    if let Err(err) = app::run(args).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Bajraweb exited");
}
