use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::{ApiError, ApiResult};
use crate::session::{clear_session_cookie, session_cookie};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Exchange the admin credentials for the session cookie.
async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    if !state.auth().verify_credentials(&request.email, &request.password) {
        tracing::warn!("Rejected admin login");
        return Err(ApiError::InvalidCredentials);
    }

    let cookie = session_cookie(state.auth().issue_token(), state.config().secure_cookies);
    tracing::info!("Admin logged in");
    Ok(([(header::SET_COOKIE, cookie)], Json(json!({ "ok": true }))))
}

async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = clear_session_cookie(state.config().secure_cookies);
    ([(header::SET_COOKIE, cookie)], Json(json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::routes::test_support::{body_json, json_request, TestApp};
    use crate::session::SESSION_COOKIE;

    #[tokio::test]
    async fn wrong_password_sets_no_cookie() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                &json!({ "email": "admin@clevio.id", "password": "nope" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body = body_json(response).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn login_issues_the_standing_token() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                &json!({ "email": "admin@clevio.id", "password": "clevio123" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .unwrap()
            .to_string();
        let expected = format!("{SESSION_COOKIE}={}", app.state.auth().issue_token());
        assert!(cookie.starts_with(&expected));
        assert!(cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Secure"));
        assert_eq!(body_json(response).await["ok"], true);
    }

    #[tokio::test]
    async fn logout_expires_the_cookie() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(
                Request::post("/api/auth/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert!(cookie.to_str().unwrap().contains("Max-Age=0"));
    }
}
