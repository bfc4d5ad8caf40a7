use thiserror::Error;

use crate::api::transactions::TransactionsClient;

pub const API_URL_VAR: &str = "TRACKER_API_URL";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got `{value}`")]
    InvalidUrl { var: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_api_url(std::env::var(API_URL_VAR).ok())
    }

    fn from_api_url(value: Option<String>) -> Result<Self, ConfigError> {
        let api_url = match value {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => TransactionsClient::DEFAULT_BASE_URL.to_string(),
        };

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                var: API_URL_VAR,
                value: api_url,
            });
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}
