pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::drafting::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/test",
            get(health::test_handler).fallback(method_not_allowed),
        )
        .route(
            "/generate",
            post(handlers::handle_generate).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}
