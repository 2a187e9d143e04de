use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use clevio_core::{NewUpload, UploadError};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::session::AdminSession;
use crate::state::AppState;

/// Request bodies above this are cut off before the image checks run.
/// Larger than the image limit so oversized images get a descriptive error.
const UPLOAD_BODY_LIMIT: usize = 8 * 1024 * 1024;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/upload", post(upload))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}

#[derive(Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    previous_path: Option<String>,
}

struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

async fn read_form(mut multipart: Multipart) -> ApiResult<UploadForm> {
    let bad_request = |err: MultipartError| ApiError::BadRequest(err.body_text());

    let mut form = UploadForm::default();
    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(bad_request)?;
                form.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some("previousPath") => {
                let value = field.text().await.map_err(bad_request)?;
                form.previous_path = Some(value).filter(|path| !path.trim().is_empty());
            }
            _ => {}
        }
    }
    Ok(form)
}

/// Store an image and return its public URL. When `previousPath` names an
/// earlier upload, that file is removed.
async fn upload(
    _session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let form = read_form(multipart).await?;
    let file = form.file.ok_or(UploadError::Missing)?;

    let url = state
        .uploads()
        .store(NewUpload {
            file_name: file.file_name.as_deref(),
            content_type: file.content_type.as_deref(),
            bytes: &file.bytes,
            previous_path: form.previous_path.as_deref(),
        })
        .await?;

    Ok(Json(json!({ "ok": true, "url": url })))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::routes::test_support::{body_json, TestApp};

    const BOUNDARY: &str = "clevio-test-boundary";

    fn multipart_body(content_type: &str, bytes: &[u8], previous: Option<&str>) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"photo.png\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
        if let Some(previous) = previous {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"previousPath\"\r\n\r\n{previous}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(app: &TestApp, body: Vec<u8>) -> Request<Body> {
        app.authed(Request::post("/api/upload"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn uploads_in(app: &TestApp) -> usize {
        std::fs::read_dir(app.path("public/uploads"))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    #[tokio::test]
    async fn stores_image_and_returns_public_url() {
        let app = TestApp::new();
        let image = vec![7u8; 1024 * 1024];
        let request = upload_request(&app, multipart_body("image/png", &image, None));

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["ok"], true);
        let url = body["url"].as_str().unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));
        assert_eq!(uploads_in(&app), 1);

        let served = app
            .router
            .clone()
            .oneshot(Request::get(url).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(served.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn oversized_image_is_rejected() {
        let app = TestApp::new();
        let image = vec![7u8; 3 * 1024 * 1024];
        let request = upload_request(&app, multipart_body("image/png", &image, None));

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["ok"], false);
        assert_eq!(uploads_in(&app), 0);
    }

    #[tokio::test]
    async fn non_image_is_rejected() {
        let app = TestApp::new();
        let request = upload_request(&app, multipart_body("text/plain", b"hello", None));

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(uploads_in(&app), 0);
    }

    #[tokio::test]
    async fn replacing_removes_the_previous_upload() {
        let app = TestApp::new();
        std::fs::create_dir_all(app.path("public/uploads")).unwrap();
        std::fs::write(app.path("public/uploads/old.png"), b"old").unwrap();

        let request = upload_request(
            &app,
            multipart_body("image/png", &[1, 2, 3], Some("/uploads/old.png")),
        );
        let response = app.router.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(!app.path("public/uploads/old.png").exists());
        assert_eq!(uploads_in(&app), 1);
    }

    #[tokio::test]
    async fn requires_a_session() {
        let app = TestApp::new();
        let request = Request::post("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body("image/png", &[1], None)))
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_file_is_rejected() {
        let app = TestApp::new();
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"previousPath\"\r\n\r\n/uploads/a.png\r\n--{BOUNDARY}--\r\n"
        );
        let request = app
            .authed(Request::post("/api/upload"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
