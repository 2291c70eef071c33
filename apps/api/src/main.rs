mod config;
mod errors;
mod frameworks;
mod generation;
mod questionnaire;
mod render;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::frameworks::FrameworkRegistry;
use crate::render::{ChromiumRenderer, PdfRenderer};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::DocumentStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Compliance Documentation API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // The store root must exist before the first generation request
    tokio::fs::create_dir_all(&config.generated_dir).await?;
    info!("Document store root: {}", config.generated_dir.display());

    let frameworks = Arc::new(FrameworkRegistry::builtin());
    info!(
        "Framework registry loaded ({} frameworks)",
        frameworks.all().len()
    );

    let store = DocumentStore::new(config.generated_dir.clone());
    let renderer: Arc<dyn PdfRenderer> = Arc::new(ChromiumRenderer);

    let state = AppState {
        config: config.clone(),
        frameworks,
        store,
        renderer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
