use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "HealthLens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the snapshot location.
pub const SNAPSHOT_ENV: &str = "HEALTHLENS_SNAPSHOT";

/// Get the application data directory (~/HealthLens/).
/// Falls back to the working directory when no home directory is known.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Record snapshot to analyze: `$HEALTHLENS_SNAPSHOT`, else ~/HealthLens/records.json.
pub fn snapshot_path() -> PathBuf {
    std::env::var_os(SNAPSHOT_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| app_data_dir().join("records.json"))
}

/// Log filter used when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "healthlens=debug,healthlens_lib=debug"
    } else {
        "healthlens=info,healthlens_lib=info"
    }
}
