//! Provider configuration from TOML (`[provider]` section)

use crate::openai::error::OpenAiError;
use crate::openai::generator::OpenAiConfig;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL including the API version path.
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer `api_key_env`.
    pub api_key: Option<String>,
    /// Cap on generated tokens per call.
    pub max_tokens: Option<u32>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            max_tokens: Some(1024),
        }
    }
}

impl FileProviderConfig {
    /// The direct key if set, otherwise the value of `api_key_env`
    pub fn resolve_api_key(&self) -> Result<String, OpenAiError> {
        if let Some(key) = self.api_key.as_deref()
            && !key.trim().is_empty()
        {
            return Ok(key.to_string());
        }

        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| OpenAiError::MissingApiKey(self.api_key_env.clone()))
    }

    pub fn to_openai_config(&self) -> Result<OpenAiConfig, OpenAiError> {
        Ok(OpenAiConfig::new(self.resolve_api_key()?)
            .with_base_url(&self.base_url)
            .with_model(&self.model)
            .with_max_tokens(self.max_tokens))
    }
}
