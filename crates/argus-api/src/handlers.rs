//! Route handler functions for all API endpoints.
//!
//! Each handler extracts path/body parameters via axum extractors,
//! interacts with AppState services, and returns JSON responses.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tracing::error;

use argus_chat::Turn;
use argus_core::types::{StructuredQuery, SupplierProfile};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub supplier_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TurnsResponse {
    pub turns: Vec<Turn>,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET /suppliers - full roster with risk categories, in insertion order.
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> Result<Json<Vec<SupplierProfile>>, ApiError> {
    let suppliers = state.store.get_all().map_err(|e| {
        error!(error = %e, "Failed to fetch suppliers");
        ApiError::Internal("Failed to fetch suppliers".to_string())
    })?;

    Ok(Json(suppliers))
}

/// GET /suppliers/:id - one supplier profile by numeric id.
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SupplierProfile>, ApiError> {
    let id: u32 = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid supplier ID".to_string()))?;

    let supplier = state.store.get_by_id(id).map_err(|e| {
        error!(error = %e, id, "Failed to fetch supplier");
        ApiError::Internal("Failed to fetch supplier".to_string())
    })?;

    match supplier {
        Some(profile) => Ok(Json(profile)),
        None => Err(ApiError::NotFound("Supplier not found".to_string())),
    }
}

/// POST /suppliers/search - filter the roster with a StructuredQuery body.
pub async fn search_suppliers(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Vec<SupplierProfile>>, ApiError> {
    // Validated by hand so rejected bodies produce the documented
    // {message, errors} shape instead of the extractor's default.
    let query: StructuredQuery =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidQuery(vec![e.to_string()]))?;

    let results = state.store.search(&query).map_err(|e| {
        error!(error = %e, kind = query.kind(), "Failed to search suppliers");
        ApiError::Internal("Failed to search suppliers".to_string())
    })?;

    Ok(Json(results))
}

/// POST /chat - submit the last message's content, return the resolved reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ChatResponse>, ApiError> {
    let messages = body
        .get("messages")
        .and_then(|m| m.as_array())
        .ok_or_else(|| ApiError::BadRequest("'messages' must be an array".to_string()))?;

    let last = messages
        .last()
        .ok_or_else(|| ApiError::BadRequest("'messages' must not be empty".to_string()))?;

    let content = last
        .get("content")
        .and_then(|c| c.as_str())
        .ok_or_else(|| {
            ApiError::BadRequest("Last message must have string content".to_string())
        })?;

    let turn = state.orchestrator.submit(content).await?;

    Ok(Json(ChatResponse {
        result: turn.content,
    }))
}

/// GET /chat/turns - snapshot of the ordered conversation log.
pub async fn chat_turns(State(state): State<AppState>) -> Result<Json<TurnsResponse>, ApiError> {
    let turns = state.orchestrator.turns().map_err(|e| {
        error!(error = %e, "Failed to fetch chat turns");
        ApiError::Internal("Failed to fetch chat turns".to_string())
    })?;

    Ok(Json(TurnsResponse { turns }))
}

/// GET /chat/events - SSE stream of turn events.
pub async fn chat_events(
    State(state): State<AppState>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>> + Send> {
    let rx = state.orchestrator.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().event("turn").data(data)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
}

/// GET /health - health check.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let uptime = state.start_time.elapsed().as_secs();
    let supplier_count = state.store.len().unwrap_or(0) as u64;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: "0.1.0".to_string(),
        uptime_secs: uptime,
        supplier_count,
    }))
}
