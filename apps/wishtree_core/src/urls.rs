use axum::{Router, routing::get};
use crate::views::{wishes::{create_wish, list_wishes}, wishtree_health::{health, index}};
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/wishes", get(list_wishes).post(create_wish))
        .with_state(state)
}
