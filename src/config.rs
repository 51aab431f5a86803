//! API Configuration
//!
//! The backend base URL, passed to the client at construction.

use reqwest::Url;

use crate::api::{ApiError, ApiResult};

/// Base URL used when `TODO_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let mut url = Url::parse(base_url).map_err(|e| ApiError::Url(format!("{}: {}", base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::Url(format!("{}: not a base url", base_url)));
        }
        // Without the trailing slash `join` would drop the last segment
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self { base_url: url })
    }

    /// Read the base URL baked in at build time.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path (e.g. `todos/3`) against the base URL.
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Url(format!("{}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ApiConfig::new(DEFAULT_API_URL).unwrap();
        assert_eq!(config.endpoint("todos/").unwrap().as_str(), "http://localhost:8000/todos/");
        assert_eq!(config.endpoint("/todos/7").unwrap().as_str(), "http://localhost:8000/todos/7");
        assert_eq!(
            config.endpoint("messages/clear").unwrap().as_str(),
            "http://localhost:8000/messages/clear"
        );
    }

    #[test]
    fn test_base_with_path_prefix_keeps_prefix() {
        let config = ApiConfig::new("https://example.com/api").unwrap();
        assert_eq!(config.base_url().as_str(), "https://example.com/api/");
        assert_eq!(config.endpoint("messages/").unwrap().as_str(), "https://example.com/api/messages/");
    }

    #[test]
    fn test_rejects_invalid_base() {
        assert!(matches!(ApiConfig::new("localhost without scheme"), Err(ApiError::Url(_))));
        assert!(matches!(ApiConfig::new("mailto:someone@example.com"), Err(ApiError::Url(_))));
    }
}
