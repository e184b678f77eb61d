//! Gemini `generateContent` adapter with Google Search grounding.
//!
//! The service rejects `responseMimeType: application/json` when the search
//! tool is enabled, so every call here is plain text plus grounding metadata.
//! If that restriction is ever lifted, the brainstorm delimiter protocol
//! should move to a schema-validated response.

use super::{GroundedClient, QueryOutput, RawCitation};
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client, reading the API key from the configured environment variable
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::MissingApiKey(config.api_key_env.clone()))?;
        Self::with_key(config, api_key)
    }

    pub fn with_key(config: &ProviderConfig, api_key: String) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn endpoint_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GroundedClient for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn query(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<QueryOutput, ProviderError> {
        let url = self.endpoint_url();
        let body = build_request_body(prompt, system_instruction);

        debug!("Sending grounded request to {} ({} prompt chars)", url, prompt.len());

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(map_http_error(status, body_text));
        }

        parse_response(&body_text)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<RequestContent<'a>>,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

fn build_request_body<'a>(
    prompt: &'a str,
    system_instruction: Option<&'a str>,
) -> GenerateRequest<'a> {
    GenerateRequest {
        contents: vec![RequestContent {
            role: Some("user"),
            parts: vec![TextPart { text: prompt }],
        }],
        system_instruction: system_instruction.map(|text| RequestContent {
            role: None,
            parts: vec![TextPart { text }],
        }),
        tools: vec![Tool {
            google_search: GoogleSearch {},
        }],
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<RawCitation>,
}

/// Extract the answer text and citations from the first candidate
fn parse_response(body: &str) -> Result<QueryOutput, ProviderError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        debug!("Response carried no candidates");
        return Ok(QueryOutput::new("", Vec::new()));
    };

    let text = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter(|p| !p.thought.unwrap_or(false))
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    let citations = candidate
        .grounding_metadata
        .map(|m| m.grounding_chunks.into_iter().filter_map(|c| c.web).collect())
        .unwrap_or_default();

    Ok(QueryOutput::new(text, citations))
}

fn map_http_error(status: reqwest::StatusCode, body: String) -> ProviderError {
    match status.as_u16() {
        401 | 403 => ProviderError::Auth,
        429 => ProviderError::RateLimited,
        code => ProviderError::Status { code, body },
    }
}
