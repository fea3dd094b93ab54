//! NutriSafe: disease-risk scoring and healthier-alternative
//! recommendation for packaged food.
//!
//! Three layers: a compiled-in disease-trigger knowledgebase
//! (`knowledge`), fitted model artifacts behind capability traits
//! (`model`), and the analysis engine that combines symbolic tagging,
//! learned risk prediction, and nearest-neighbor retrieval (`analysis`).
//! The `api` module is a thin axum surface over the engine.

pub mod analysis;
pub mod api;
pub mod config;
pub mod knowledge;
pub mod model;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use analysis::Engine;
use model::ModelStore;

/// Fatal startup failures. A process that cannot load its artifacts or
/// bind its socket refuses to serve.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("model artifacts unavailable: {0}")]
    Model(#[from] model::ModelError),

    #[error("server startup failed: {0}")]
    Server(#[from] api::ServerError),
}

/// Run the service until interrupted.
pub async fn run() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let models_dir = config::models_dir();
    let store = ModelStore::load(&models_dir)?;
    let engine = Arc::new(Engine::new(Arc::new(store)));

    tracing::info!(
        diseases = engine.knowledgebase().disease_count(),
        catalog_products = engine.catalog_len(),
        "engine ready"
    );

    let mut server = api::start_server(engine, config::bind_addr()).await?;
    tracing::info!(addr = %server.addr(), "serving");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    server.shutdown();

    Ok(())
}
