//! Client Configuration
//!
//! Location of the REST backend, injected into `TaskClient::new`.

use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Configuration for the REST access layer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Scheme + host (+ optional path prefix) of the backend, e.g. `http://localhost:8000`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Config baked in at build time via `TASKHUB_API_URL`
    pub fn from_build_env() -> Self {
        match option_env!("TASKHUB_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Base URL without trailing slashes, checked to be an absolute URL
    pub(crate) fn normalized_base(&self) -> ApiResult<String> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        reqwest::Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        Ok(trimmed.to_string())
    }
}
