/// Popup configuration, optionally supplied by the host page
use crate::video_id::{FALLBACK_VIDEO_ID, is_valid_video_id};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/ask_video";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid endpoint {0:?}: {1}")]
    InvalidEndpoint(String, String),

    #[error("endpoint {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error("fallback video ID {0:?} is not 11 characters of [a-zA-Z0-9_-]")]
    InvalidFallback(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PopupConfig {
    pub endpoint: String,
    pub fallback_video_id: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        PopupConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fallback_video_id: FALLBACK_VIDEO_ID.to_string(),
        }
    }
}

impl PopupConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(self.endpoint.clone(), e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(self.endpoint.clone()));
        }

        if !is_valid_video_id(&self.fallback_video_id) {
            return Err(ConfigError::InvalidFallback(self.fallback_video_id.clone()));
        }

        Ok(())
    }

    /// Return this config if valid, otherwise the defaults
    pub fn or_default(self) -> PopupConfig {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::error!("Ignoring popup config: {}", e);
                PopupConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PopupConfig::default();

        assert_eq!(config.endpoint, "http://127.0.0.1:5000/ask_video");
        assert_eq!(config.fallback_video_id, "iv-5mZ_9CPY");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PopupConfig =
            serde_json::from_str(r#"{"endpoint": "https://ask.example.com/ask_video"}"#).unwrap();

        assert_eq!(config.endpoint, "https://ask.example.com/ask_video");
        assert_eq!(config.fallback_video_id, FALLBACK_VIDEO_ID);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_camel_case_fields() {
        let config: PopupConfig =
            serde_json::from_str(r#"{"fallbackVideoId": "dQw4w9WgXcQ"}"#).unwrap();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.fallback_video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = PopupConfig {
            endpoint: "not a url".to_string(),
            ..PopupConfig::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::InvalidEndpoint(_, _))));
    }

    #[test]
    fn test_unsupported_scheme() {
        let config = PopupConfig {
            endpoint: "ftp://127.0.0.1/ask_video".to_string(),
            ..PopupConfig::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_invalid_fallback_reverts_to_default() {
        let config = PopupConfig {
            endpoint: "http://localhost:8080/ask".to_string(),
            fallback_video_id: "too-short".to_string(),
        };

        assert!(matches!(config.validate(), Err(ConfigError::InvalidFallback(_))));
        assert_eq!(config.or_default(), PopupConfig::default());
    }
}
