use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::prediction::PREDICT_PATH;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Served by the static host at `/config.json`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
}

/// Base URL of the prediction service, normalised so relative joins keep its path.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEndpoint {
    base: Url,
}

impl ApiEndpoint {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut base = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        match base.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { base })
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    pub fn predict_url(&self) -> String {
        match self.base.join(PREDICT_PATH) {
            Ok(url) => url.to_string(),
            // join of a fixed relative path onto an http base cannot fail
            Err(_) => format!("{}{}", self.base, PREDICT_PATH),
        }
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self::parse(DEFAULT_API_URL).expect("DEFAULT_API_URL is a valid http URL")
    }
}

impl TryFrom<&ClientConfig> for ApiEndpoint {
    type Error = ConfigError;

    fn try_from(config: &ClientConfig) -> Result<Self, Self::Error> {
        Self::parse(&config.api_url)
    }
}
