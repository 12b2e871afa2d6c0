use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::prompt::PromptTemplate;
use crate::AiCfg;

const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("AI enhancement is not configured")]
    Disabled,

    #[error("enhancer timed out after {0:?}")]
    Timeout(Duration),

    #[error("enhancer request failed: {0}")]
    Transport(String),

    #[error("enhancer returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed enhancer response: {0}")]
    Malformed(String),
}

impl EnhanceError {
    /// Worth another attempt: the remote side may answer differently later.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Transport(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Disabled | Self::Malformed(_) => false,
        }
    }
}

/// Rewrites text through a generative-language model.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance(&self, text: &str, template: &PromptTemplate) -> Result<String, EnhanceError>;
}

// ---------- Gemini wire types ----------
#[derive(Serialize)]
struct GenerateReq<'a> {
    contents: [ReqContent<'a>; 1],
}

#[derive(Serialize)]
struct ReqContent<'a> {
    parts: [ReqPart<'a>; 1],
}

#[derive(Serialize)]
struct ReqPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResp {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<RespPart>,
}

#[derive(Deserialize)]
struct RespPart {
    text: Option<String>,
}

fn first_candidate_text(resp: GenerateResp) -> Result<String, EnhanceError> {
    let parts = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .ok_or_else(|| EnhanceError::Malformed("no candidate content".into()))?;

    let text: String = parts.into_iter().filter_map(|p| p.text).collect();
    let text = text.trim();
    if text.is_empty() {
        return Err(EnhanceError::Malformed("candidate has no text".into()));
    }
    Ok(text.to_string())
}

// ---------- Gemini client ----------
pub struct GeminiEnhancer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
    max_retries: u32,
}

impl GeminiEnhancer {
    /// `Ok(None)` when no API key is configured.
    pub fn from_cfg(cfg: &AiCfg) -> Result<Option<Self>, EnhanceError> {
        let Some(api_key) = cfg.api_key.clone() else {
            return Ok(None);
        };
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| EnhanceError::Transport(e.to_string()))?;
        let endpoint = format!(
            "{}/models/{}:generateContent",
            cfg.base_url.trim_end_matches('/'),
            cfg.model
        );
        Ok(Some(Self {
            client,
            endpoint,
            api_key,
            timeout: cfg.timeout,
            max_retries: cfg.max_retries,
        }))
    }

    async fn generate_once(&self, prompt: &str) -> Result<String, EnhanceError> {
        let body = GenerateReq {
            contents: [ReqContent {
                parts: [ReqPart { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EnhanceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = resp.bytes().await.map_err(|e| self.request_error(e))?;
        let parsed: GenerateResp =
            serde_json::from_slice(&raw).map_err(|e| EnhanceError::Malformed(e.to_string()))?;
        first_candidate_text(parsed)
    }

    // the url never reaches callers or logs
    fn request_error(&self, e: reqwest::Error) -> EnhanceError {
        let e = e.without_url();
        if e.is_timeout() {
            EnhanceError::Timeout(self.timeout)
        } else {
            EnhanceError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl Enhancer for GeminiEnhancer {
    async fn enhance(&self, text: &str, template: &PromptTemplate) -> Result<String, EnhanceError> {
        let prompt = template.render(text);
        let mut attempt = 0u32;
        loop {
            match self.generate_once(&prompt).await {
                Ok(out) => return Ok(out),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    let delay = RETRY_BASE_DELAY * 2u32.pow(attempt);
                    attempt += 1;
                    warn!(attempt, error = %e, ?delay, "gemini call failed, retrying");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
