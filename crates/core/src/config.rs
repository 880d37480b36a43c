//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into core
//! services, so nothing reads process-wide environment variables during
//! request handling.

use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-5.1";
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 1500;

/// Connection settings for the text-completion provider.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_completion_tokens: u32,
}

impl ProviderConfig {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            api_key,
            base_url,
            model,
            max_completion_tokens: DEFAULT_MAX_COMPLETION_TOKENS,
        }
    }

    /// The chat-completions endpoint URL for this provider.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
    provider: ProviderConfig,
}

impl CoreConfig {
    pub fn new(data_dir: PathBuf, provider: ProviderConfig) -> Self {
        Self { data_dir, provider }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_url_tolerates_trailing_slash() {
        let cfg = ProviderConfig::new(
            "key".into(),
            "https://example.test/v1/".into(),
            DEFAULT_MODEL.into(),
        );
        assert_eq!(cfg.completions_url(), "https://example.test/v1/chat/completions");
    }
}
