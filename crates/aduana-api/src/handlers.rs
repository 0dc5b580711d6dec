//! API Handlers
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use aduana_explain::ExplanationAgent;

use crate::AppState;

/// Body of the validate/explain endpoints: the uploaded file's name plus the
/// raw invoice JSON the digitizer produced. The invoice member is passed to
/// the engine as-is: malformed shapes degrade inside it, they never reject
/// the request.
#[derive(Debug, Deserialize)]
pub struct InvoicePayload {
    pub file_name: String,
    pub invoice: Value,
}

pub async fn validate(
    State(state): State<AppState>,
    Json(payload): Json<InvoicePayload>,
) -> (StatusCode, Json<Value>) {
    let report = aduana_engine::validate(&payload.invoice);

    state.metrics.validations.inc();
    tracing::info!(
        file = %payload.file_name,
        status = %report.overall_status,
        errors = report.error,
        "invoice validated"
    );

    if let Ok(mut history) = state.history.lock() {
        history.record(&payload.file_name, &report);
    }

    (StatusCode::OK, Json(json!(report)))
}

/// Same as `validate`, plus generated commentary. Never 500s: an agent
/// failure degrades into the `agentAnswer` text.
pub async fn explain(
    State(state): State<AppState>,
    Json(payload): Json<InvoicePayload>,
) -> (StatusCode, Json<Value>) {
    let report = aduana_engine::validate(&payload.invoice);

    state.metrics.explanations.inc();

    let answer = match state.agent.explain(&payload.file_name, &report) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(file = %payload.file_name, error = %e, "explanation failed");
            format!("No fue posible generar la explicación: {}", e)
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "fileName": payload.file_name,
            "overallStatus": report.overall_status,
            "total": report.total,
            "ok": report.ok,
            "partial": report.partial,
            "error": report.error,
            "rules": report.rules,
            "agentAnswer": answer,
        })),
    )
}

pub async fn history(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.history.lock() {
        Ok(history) => {
            let rows: Vec<Value> = history.recent_first().iter().map(|e| json!(e)).collect();
            (StatusCode::OK, Json(json!(rows)))
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "history unavailable"})),
        ),
    }
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")})),
    )
}

pub async fn metrics(State(state): State<AppState>) -> (StatusCode, String) {
    match state.metrics.encode() {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
