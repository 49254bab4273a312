//! Runtime configuration.
//!
//! Defaults are baked in at compile time from `REPORTDESK_API_URL` and
//! `REPORTDESK_UPGRADE_URL`. The host page may override any field with a JSON
//! blob; see [`AppConfig::from_json`].

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_UPGRADE_URL: &str = "/pricing";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the auth backend, without trailing slash
    pub api_url: String,
    /// Where the upsell modal's "Upgrade" link points
    pub upgrade_url: String,
    /// Max tracing level: `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Reports allowed per session on the free plan; `None` is unlimited
    pub free_runs: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("REPORTDESK_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_owned(),
            upgrade_url: option_env!("REPORTDESK_UPGRADE_URL")
                .unwrap_or(DEFAULT_UPGRADE_URL)
                .to_owned(),
            log_level: "info".to_owned(),
            free_runs: Some(3),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config blob.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        config.api_url = config.api_url.trim().trim_end_matches('/').to_owned();
        if !(config.api_url.starts_with("http://") || config.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(config.api_url));
        }
        Ok(config)
    }

    /// Join a path onto `api_url`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_blob_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"api_url": "https://api.example.com/v1/"}"#)
            .expect("valid config");
        assert_eq!(config.api_url, "https://api.example.com/v1");
        assert_eq!(config.upgrade_url, AppConfig::default().upgrade_url);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn non_http_api_url_is_rejected() {
        let err = AppConfig::from_json(r#"{"api_url": "ftp://x"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiUrl(_)));
    }

    #[test]
    fn malformed_blob_is_a_parse_error() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn endpoint_joins_single_slash() {
        let config = AppConfig {
            api_url: "https://api.example.com".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint("/auth/login"), "https://api.example.com/auth/login");
        assert_eq!(config.endpoint("auth/register"), "https://api.example.com/auth/register");
    }

    #[test]
    fn unlimited_runs_deserialize_from_null() {
        let config = AppConfig::from_json(r#"{"free_runs": null}"#).expect("valid config");
        assert_eq!(config.free_runs, None);
    }
}
