use crate::download::resolve_download_url;
use crate::lead::{validate, LeadStore};
use agent_embedding::{EmbeddingClient, Provider};
use agent_protocol::{Agent, ErrorEnvelope, LeadForm, LeadRecord};
use agent_search::{SearchEngine, SearchOptions, SemanticBooster};
use anyhow::Result;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

pub struct AppState {
    agents: Vec<Agent>,
    leads: LeadStore,
}

pub fn router(agents: Vec<Agent>, leads: LeadStore) -> Router {
    let state = Arc::new(AppState { agents, leads });
    Router::new()
        .route("/api/search", get(search_handler))
        .route("/api/lead", post(lead_handler))
        .route("/api/download", get(download_handler))
        .route("/healthz", get(health_handler))
        .with_state(state)
}

pub async fn serve(addr: &str, agents: Vec<Agent>, leads: LeadStore) -> Result<()> {
    let app = router(agents, leads);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Serving agent catalog API on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
    ai: Option<String>,
}

/// Each request gets a fresh engine over the shared catalog snapshot, so
/// searches stay stateless and an `ai=` provider choice is per-request.
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let provider = params.ai.as_deref().and_then(Provider::parse);
    let booster = match provider {
        Some(provider) => SemanticBooster::new(Some(EmbeddingClient::from_env(provider))),
        None => SemanticBooster::disabled(),
    };

    let mut engine = SearchEngine::new(state.agents.clone(), booster);
    let options = SearchOptions {
        boost: provider.is_some(),
    };

    match engine.search(&params.q, &options).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            log::error!("Search failed for {:?}: {e}", params.q);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorEnvelope::new("search_failed", "Please try again or browse all agents"),
            )
        }
    }
}

async fn lead_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<LeadForm>,
) -> Response {
    let errors = validate(&form);
    if !errors.is_empty() {
        let envelope = ErrorEnvelope::new("validation_failed", "Validation failed")
            .with_details(serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null));
        return error_response(StatusCode::BAD_REQUEST, envelope);
    }

    let record = LeadRecord::capture(form);
    match state.leads.append(&record) {
        Ok(()) => Json(serde_json::json!({
            "success": true,
            "message": "Lead captured successfully",
        }))
        .into_response(),
        Err(e) => {
            log::error!("Failed to persist lead: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorEnvelope::new("lead_failed", "Failed to process lead"),
            )
        }
    }
}

#[derive(Deserialize)]
struct DownloadParams {
    id: Option<String>,
}

async fn download_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DownloadParams>,
) -> Response {
    let Some(id) = params.id.filter(|id| !id.is_empty()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            ErrorEnvelope::new("missing_id", "Agent ID is required"),
        );
    };
    let Some(agent) = state.agents.iter().find(|a| a.id == id) else {
        return error_response(
            StatusCode::NOT_FOUND,
            ErrorEnvelope::new("not_found", "Agent not found"),
        );
    };

    let target = resolve_download_url(&agent.config_url);
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, target)
        .body(Body::empty())
        .expect("valid HTTP response")
}

async fn health_handler() -> Response {
    Json(serde_json::json!({ "status": "ok" })).into_response()
}

fn error_response(status: StatusCode, envelope: ErrorEnvelope) -> Response {
    (status, Json(envelope)).into_response()
}
