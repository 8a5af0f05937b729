pub mod app;
pub mod auth;
pub mod config;
pub mod models;
pub mod router;
pub mod session;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for hosts embedding the core.
/// Honors RUST_LOG, falling back to the app default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
    tracing::info!("{} core v{}", config::APP_NAME, config::APP_VERSION);
}
