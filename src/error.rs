use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API key not found (environment variable '{0}' is not set)")]
    MissingApiKey(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication rejected by the model service")]
    Auth,

    #[error("Rate limited by the model service")]
    RateLimited,

    #[error("Model service returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Invalid response from model service: {0}")]
    InvalidResponse(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Subject must not be empty")]
    EmptySubject,

    #[error("At least one non-empty aspect is required")]
    NoAspects,
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
