pub mod enhancer;
pub mod polisher;
pub mod prompt;
pub mod serializers;
pub mod urls;
pub mod views;

use std::time::Duration;

pub use enhancer::{EnhanceError, Enhancer, GeminiEnhancer};
pub use polisher::Polisher;
pub use prompt::PromptTemplate;

#[derive(Clone, Debug)]
pub struct AiCfg {
    /// Gemini API key. `None` disables enhancement; nothing else fails.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Per-attempt request timeout (default 10s). Override with AI_TIMEOUT_SECS.
    pub timeout: Duration,
    /// Extra attempts for transient failures (default 2).
    pub max_retries: u32,
    /// Word budget handed to the polish prompt (default 30).
    pub polish_max_words: u32,
}

impl Default for AiCfg {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
            polish_max_words: 30,
        }
    }
}

impl AiCfg {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let model = std::env::var("GEMINI_MODEL").unwrap_or(defaults.model);
        let base_url = std::env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url);

        let timeout = std::env::var("AI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let max_retries = std::env::var("AI_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_retries);
        let polish_max_words = std::env::var("POLISH_MAX_WORDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.polish_max_words);

        Self {
            api_key,
            model,
            base_url,
            timeout,
            max_retries,
            polish_max_words,
        }
    }

    /// Build the polisher described by this config: Gemini-backed when a key is
    /// present, disabled otherwise.
    pub fn polisher(&self) -> Result<Polisher, EnhanceError> {
        let template = PromptTemplate::wish_polish(self.polish_max_words);
        match GeminiEnhancer::from_cfg(self)? {
            Some(gemini) => Ok(Polisher::new(Some(std::sync::Arc::new(gemini)), template)),
            None => Ok(Polisher::new(None, template)),
        }
    }
}
