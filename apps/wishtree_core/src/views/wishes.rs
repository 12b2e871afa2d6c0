use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::error::WishError;
use crate::serializers::wish::CreateWishReq;
use crate::types::Wish;
use crate::AppState;

pub async fn list_wishes(State(state): State<AppState>) -> Result<Json<Vec<Wish>>, WishError> {
    Ok(Json(state.wishes.list_wishes().await?))
}

pub async fn create_wish(
    State(state): State<AppState>,
    payload: Result<Json<CreateWishReq>, JsonRejection>,
) -> Result<(StatusCode, Json<Wish>), WishError> {
    let Json(req) = payload.map_err(WishError::from)?;
    let wish = state.wishes.submit(req.into()).await?;
    Ok((StatusCode::CREATED, Json(wish)))
}
