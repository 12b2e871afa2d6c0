use axum::{Router, routing::post};
use crate::polisher::Polisher;
use crate::views::wish_polish::polish;

pub fn router(polisher: Polisher) -> Router {
    Router::new()
        .route("/api/polish", post(polish))
        .with_state(polisher)
}
