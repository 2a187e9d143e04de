pub mod auth;
pub mod content;
pub mod health;
pub mod pages;
pub mod preview;
pub mod upload;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(state.config().public_dir.join("assets"));
    let uploads = ServeDir::new(&state.config().uploads_dir);

    Router::new()
        .merge(health::routes())
        .merge(content::routes())
        .merge(auth::routes())
        .merge(upload::routes())
        .merge(preview::routes())
        .merge(pages::routes())
        .nest_service("/assets", assets)
        .nest_service("/uploads", uploads)
        .with_state(state)
}
