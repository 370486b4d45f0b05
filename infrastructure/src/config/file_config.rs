//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section and field has a default, so a missing or partial file
//! still yields a runnable configuration.

use crate::scrape::ProviderSettings;
use calltone_application::AnalysisParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transcript provider configuration (`[provider]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Listing page URL, including the company symbol query.
    pub listing_url: String,
    /// Origin used to absolutize relative links.
    pub origin: String,
    /// Company name used in the listing fallback scan and default title.
    pub company: String,
    /// Publisher organization, added to the paragraph denylist.
    pub organization: String,
    /// Path fragment identifying transcript links.
    pub transcript_path: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        let settings = ProviderSettings::default();
        Self {
            listing_url: settings.listing_url,
            origin: settings.origin,
            company: settings.company,
            organization: settings.organization,
            transcript_path: settings.transcript_path,
        }
    }
}

impl FileProviderConfig {
    pub fn to_settings(&self) -> ProviderSettings {
        ProviderSettings {
            listing_url: self.listing_url.clone(),
            origin: self.origin.clone(),
            company: self.company.clone(),
            organization: self.organization.clone(),
            transcript_path: self.transcript_path.clone(),
        }
    }
}

/// Model API configuration (`[model]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the chat-completions API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
    /// Attempts per call, minimum 1.
    pub max_attempts: u32,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4-turbo".to_string(),
            timeout_secs: 45,
            max_attempts: 3,
        }
    }
}

impl FileModelConfig {
    /// Resolve the API key: environment variable first, then the direct
    /// config value.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Cache configuration (`[cache]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Path of the cache file.
    pub path: String,
    /// Freshness window in hours.
    pub ttl_hours: u64,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            path: "analysis_cache.json".to_string(),
            ttl_hours: 24,
        }
    }
}

impl FileCacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_hours * 3600)
    }
}

/// HTTP server configuration (`[server]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Bind address for the analysis endpoint.
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Pipeline configuration (`[analysis]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Transcripts fetched and analyzed per run.
    pub transcript_limit: usize,
    /// Serve the built-in dataset when the provider fails entirely.
    pub fallback_enabled: bool,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        let params = AnalysisParams::default();
        Self {
            transcript_limit: params.transcript_limit,
            fallback_enabled: params.fallback_enabled,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Transcript provider settings
    pub provider: FileProviderConfig,
    /// Model API settings
    pub model: FileModelConfig,
    /// Analysis cache settings
    pub cache: FileCacheConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Pipeline settings
    pub analysis: FileAnalysisConfig,
}

impl FileConfig {
    pub fn analysis_params(&self) -> AnalysisParams {
        AnalysisParams::default()
            .with_transcript_limit(self.analysis.transcript_limit)
            .with_fallback_enabled(self.analysis.fallback_enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
company = "Acme"
listing_url = "https://news.example.com/transcripts/?symbol=ACME"

[model]
model = "gpt-4o-mini"
max_attempts = 2

[cache]
ttl_hours = 6

[server]
bind = "127.0.0.1:9000"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.company, "Acme");
        assert_eq!(config.model.model, "gpt-4o-mini");
        assert_eq!(config.model.max_attempts, 2);
        assert_eq!(config.cache.ttl(), Duration::from_secs(6 * 3600));
        assert_eq!(config.server.bind, "127.0.0.1:9000");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[analysis]
transcript_limit = 2
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.analysis.transcript_limit, 2);
        // Defaults should apply
        assert_eq!(config.provider.company, "NVIDIA");
        assert_eq!(config.cache.ttl_hours, 24);
        assert!(config.analysis.fallback_enabled);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.model.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.analysis.transcript_limit, 4);
        assert!(config.provider.listing_url.contains("symbol=NVDA"));
    }

    #[test]
    fn test_analysis_params_projection() {
        let config: FileConfig = toml::from_str(
            r#"
[analysis]
transcript_limit = 3
fallback_enabled = false
"#,
        )
        .unwrap();
        let params = config.analysis_params();
        assert_eq!(params.transcript_limit, 3);
        assert!(!params.fallback_enabled);
        assert_eq!(params.min_section_chars, 100);
    }
}
