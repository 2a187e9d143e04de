use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer. Any origin may read the public content; admin
/// requests rely on the session cookie and stay same-origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers([header::CONTENT_TYPE])
}
