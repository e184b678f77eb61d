#[cfg(test)]
mod fake;
mod gemini;

#[cfg(test)]
pub use fake::ScriptedClient;
pub use gemini::GeminiClient;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A citation record as the model service reports it, before any filtering
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawCitation {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct QueryOutput {
    /// Raw answer text, possibly empty; callers pick their own default
    pub text: String,
    pub citations: Vec<RawCitation>,
}

impl QueryOutput {
    pub fn new(text: impl Into<String>, citations: Vec<RawCitation>) -> Self {
        Self {
            text: text.into(),
            citations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One search-grounded generation call. Implementations never retry and
/// surface every transport or service failure to the caller.
#[async_trait]
pub trait GroundedClient: Send + Sync {
    fn name(&self) -> &'static str;

    async fn query(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<QueryOutput, ProviderError>;
}

/// Create the process-wide client from configuration
pub fn create_client(config: &ProviderConfig) -> Result<Arc<dyn GroundedClient>, ProviderError> {
    Ok(Arc::new(GeminiClient::from_config(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_passed_through() {
        let blank = QueryOutput::new("  \n ", Vec::new());
        assert_eq!(blank.text, "  \n ");
        assert!(blank.is_empty());
        assert!(QueryOutput::new("", Vec::new()).is_empty());
        assert!(!QueryOutput::new("Ruche", Vec::new()).is_empty());
    }
}
