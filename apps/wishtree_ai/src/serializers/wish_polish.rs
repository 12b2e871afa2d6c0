use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PolishReq {
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PolishResp {
    pub original: String,
    pub polished: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
