use std::sync::Arc;

use crate::config::Config;
use crate::frameworks::FrameworkRegistry;
use crate::render::PdfRenderer;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only framework table, built once at startup.
    pub frameworks: Arc<FrameworkRegistry>,
    pub store: DocumentStore,
    /// Pluggable PDF backend. Production: headless Chrome. Tests: a stub.
    pub renderer: Arc<dyn PdfRenderer>,
}
