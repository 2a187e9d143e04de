use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{
        sse::{Event, KeepAlive, Sse},
        Html,
    },
    routing::{get, post},
    Json, Router,
};
use clevio_core::{ContentEvent, SiteContent};
use clevio_template::{preview_keys, sandboxed_preview, LivePreview};
use tokio_stream::{wrappers::WatchStream, Stream, StreamExt};

use crate::error::{ApiError, ApiResult};
use crate::session::AdminSession;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/preview/{section}", post(preview_draft))
        .route("/api/preview/{section}/live", get(live_preview))
        .route("/api/template", get(template_markup))
}

/// Render an unsaved draft for one dashboard section and forward it to any
/// open live previews.
async fn preview_draft(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(section): Path<String>,
    body: Result<Json<SiteContent>, JsonRejection>,
) -> ApiResult<Html<String>> {
    let Json(draft) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let template = state.template().markup().await?;
    let allow = preview_keys(&section);

    let markup = sandboxed_preview(&template, &draft, &allow);
    state
        .content_bus()
        .publish(ContentEvent::Draft(Arc::new(draft)));

    Ok(Html(markup))
}

/// Stream the sandboxed preview of one section as it changes.
///
/// Each event carries the full markup; edits arriving in quick succession
/// produce one event.
async fn live_preview(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let template = state.template().markup().await?;
    let initial = state.store().load().await?;

    let live = LivePreview::spawn(
        state.content_bus(),
        Arc::from(template),
        Arc::new(initial),
        preview_keys(&section),
        state.config().preview_settle,
    );
    tracing::debug!(%section, "Live preview opened");

    let stream = WatchStream::new(live.subscribe()).map(|markup| {
        Ok(Event::default()
            .event("preview")
            .data(markup.replace('\r', "")))
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

/// The raw theme markup, for client-side rendering in the dashboard.
async fn template_markup(
    _session: AdminSession,
    State(state): State<AppState>,
) -> ApiResult<Html<String>> {
    Ok(Html(state.template().markup().await?))
}
