use std::sync::Arc;

use tracing::{debug, warn};

use crate::enhancer::{EnhanceError, Enhancer};
use crate::prompt::PromptTemplate;

/// Wish rewriting with two policies:
/// - [`Polisher::polish`] fails fast, for callers that asked for a rewrite;
/// - [`Polisher::polish_or_keep`] degrades to the original text, for callers
///   that only want a rewrite when one is available.
#[derive(Clone)]
pub struct Polisher {
    enhancer: Option<Arc<dyn Enhancer>>,
    template: PromptTemplate,
}

impl Polisher {
    pub fn new(enhancer: Option<Arc<dyn Enhancer>>, template: PromptTemplate) -> Self {
        Self { enhancer, template }
    }

    pub fn disabled() -> Self {
        Self::new(None, PromptTemplate::wish_polish(30))
    }

    pub fn is_enabled(&self) -> bool {
        self.enhancer.is_some()
    }

    pub async fn polish(&self, text: &str) -> Result<String, EnhanceError> {
        let enhancer = self.enhancer.as_ref().ok_or(EnhanceError::Disabled)?;
        let polished = enhancer.enhance(text, &self.template).await?;
        let polished = polished.trim();
        if polished.is_empty() {
            return Err(EnhanceError::Malformed("empty rewrite".into()));
        }
        Ok(polished.to_string())
    }

    pub async fn polish_or_keep(&self, text: &str) -> String {
        if !self.is_enabled() {
            return text.to_string();
        }
        match self.polish(text).await {
            Ok(polished) => {
                debug!("wish polished");
                polished
            }
            Err(e) => {
                warn!(error = %e, "polish failed, keeping original wish");
                text.to_string()
            }
        }
    }
}
