use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::error;

use crate::polisher::Polisher;
use crate::serializers::wish_polish::{ApiError, PolishReq, PolishResp};

/// On-demand rewrite; nothing is stored and there is no fallback text.
pub async fn polish(
    State(polisher): State<Polisher>,
    payload: Result<Json<PolishReq>, JsonRejection>,
) -> Result<Json<PolishResp>, (StatusCode, Json<ApiError>)> {
    let Json(req) = payload
        .map_err(|rejection| bad(&format!("invalid request body: {}", rejection.body_text())))?;
    let Some(original) = req.content.filter(|c| !c.trim().is_empty()) else {
        return Err(bad("content is required"));
    };

    let polished = polisher.polish(&original).await.map_err(|e| {
        error!(error = %e, "polish request failed");
        internal(e)
    })?;

    Ok(Json(PolishResp { original, polished }))
}

fn bad(msg: &str) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(ApiError { error: msg.into() }))
}
fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: e.to_string(),
        }),
    )
}
