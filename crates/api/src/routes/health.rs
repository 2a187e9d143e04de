use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Full health check: the content document must load.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.store().load().await?;

    Ok(Json(json!({
        "status": "ok",
        "content": "readable",
        "previewSubscribers": state.content_bus().subscriber_count(),
    })))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::routes::test_support::{body_json, TestApp};

    #[tokio::test]
    async fn reports_ok_when_content_loads() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn fails_when_content_is_unreadable() {
        let app = TestApp::new();
        std::fs::write(app.path("content.json"), "{ not json").unwrap();
        let response = app
            .router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["ok"], false);
    }
}
