use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "NutriSafe";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "info,nutrisafe=debug".to_string()
}

/// Get the application data directory
/// ~/NutriSafe/ on all platforms
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("NutriSafe")
}

/// Get the models directory (fitted artifacts: regressor, classifier,
/// scaler, product catalog). NUTRISAFE_MODELS_DIR overrides the default
/// for container deployments.
pub fn models_dir() -> PathBuf {
    match std::env::var_os("NUTRISAFE_MODELS_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => app_data_dir().join("models"),
    }
}

/// Address the analysis API binds to. NUTRISAFE_BIND overrides the
/// localhost default.
pub fn bind_addr() -> SocketAddr {
    std::env::var("NUTRISAFE_BIND")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8090)))
}
