pub mod health;
pub mod parse;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/parse-resume",
            get(parse::handle_parse_resume_status).post(parse::handle_parse_resume),
        )
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .with_state(state)
}
