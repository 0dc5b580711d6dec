//! Aduana API /v1: REST endpoints
//!
//! Transport boundary of the compliance service. The engine is a library
//! call; this crate owns the HTTP contract, the history log the endpoints
//! record into, and the explanation agent they delegate to.

pub mod handlers;
pub mod metrics;
pub mod middleware;

use std::sync::{Arc, Mutex};

use aduana_explain::{TemplateAgent, TemplatesFile};
use aduana_history::HistoryLog;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Shared service state. The engine itself is stateless; everything with
/// memory lives here, owned by the transport layer.
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<Mutex<HistoryLog>>,
    pub agent: Arc<TemplateAgent>,
    pub metrics: Arc<metrics::ApiMetrics>,
}

impl AppState {
    pub fn new() -> Self {
        // Commentary templates can be overridden with ADUANA_TEMPLATES;
        // a broken override falls back to the built-in template.
        let agent = match std::env::var("ADUANA_TEMPLATES") {
            Ok(path) => match TemplatesFile::load(&path) {
                Ok(templates) => TemplateAgent::with_templates(templates),
                Err(e) => {
                    tracing::warn!(error = %e, "template override unusable, using builtin");
                    TemplateAgent::new()
                }
            },
            Err(_) => TemplateAgent::new(),
        };

        Self {
            history: Arc::new(Mutex::new(HistoryLog::new())),
            agent: Arc::new(agent),
            metrics: Arc::new(metrics::ApiMetrics::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn create_app() -> Router {
    let state = AppState::new();

    Router::new()
        .route("/v1/validate", post(handlers::validate))
        .route("/v1/explain", post(handlers::explain))
        .route("/v1/history", get(handlers::history))
        .route("/v1/health", get(handlers::health))
        .route("/v1/metrics", get(handlers::metrics))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(addr: &str) {
    let app = create_app().await;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("Aduana API listening on {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
