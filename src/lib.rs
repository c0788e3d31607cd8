pub mod analytics; // Trend analysis + risk scoring
pub mod config;
pub mod dashboard;
pub mod models;
pub mod snapshot;

use tracing_subscriber::EnvFilter;

use analytics::{AnalyticsError, DefaultHealthAnalytics};
use snapshot::RecordSnapshot;

/// Analyze the configured record snapshot and print the dashboard as JSON.
pub fn run() -> Result<(), AnalyticsError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let path = config::snapshot_path();
    let snapshot = RecordSnapshot::load(&path)?;

    let engine = DefaultHealthAnalytics::new();
    let dashboard = dashboard::build_dashboard(&engine, &snapshot);

    let json = serde_json::to_string_pretty(&dashboard)
        .map_err(|e| AnalyticsError::Serialization(e.to_string()))?;
    println!("{json}");

    Ok(())
}
