use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use clevio_core::content::{assign_missing_ids, validate_content};
use clevio_core::{ContentEvent, SiteContent};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::session::AdminSession;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/content", get(get_content).put(save_content))
}

/// The current document.
async fn get_content(State(state): State<AppState>) -> ApiResult<Json<SiteContent>> {
    Ok(Json(state.store().load().await?))
}

/// Replace the document wholesale.
///
/// Blank ids are filled before validation. After the write, live previews
/// are notified and the sync webhook (if configured) is fired without
/// waiting for it.
async fn save_content(
    _session: AdminSession,
    State(state): State<AppState>,
    body: Result<Json<SiteContent>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(mut content) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let assigned = assign_missing_ids(&mut content);
    validate_content(&content)?;
    state.store().save(&content).await?;

    let content = Arc::new(content);
    let receivers = state
        .content_bus()
        .publish(ContentEvent::Saved(content.clone()));
    if let Some(sync) = state.sync() {
        sync.notify(content);
    }

    tracing::info!(assigned, receivers, "Content saved");
    Ok(Json(json!({ "ok": true })))
}
