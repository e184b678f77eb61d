use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::research::ResultMode;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub provider: ProviderConfig,

    /// URI substrings whose sources are never shown to students
    #[serde(default = "default_excluded_domains")]
    pub excluded_domains: Vec<String>,

    /// Result mode used when the command line does not pick one
    #[serde(default = "default_mode")]
    pub default_mode: ResultMode,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_sec: default_timeout_sec(),
        }
    }
}
