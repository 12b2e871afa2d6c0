use serde::{Deserialize, Serialize};

use crate::service::SubmitWish;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishReq {
    pub content: Option<String>,
    pub anonymous_id: Option<String>,
}

impl From<CreateWishReq> for SubmitWish {
    fn from(req: CreateWishReq) -> Self {
        SubmitWish {
            content: req.content,
            anonymous_id: req.anonymous_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
