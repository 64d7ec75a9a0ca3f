//! API location configuration.

use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "POST_FORM_API_URL";

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Where the Category Directory and Post Storage services live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
        }
    }
}

impl ApiConfig {
    /// Build a config from a base URL such as `https://blog.example.com`.
    ///
    /// A path prefix (`https://example.com/backend`) is kept; API paths are
    /// appended below it.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        })?;

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self { base_url: url })
    }

    /// Read `POST_FORM_API_URL`, loading a `.env` file first if present.
    ///
    /// Falls back to [`DEFAULT_API_URL`] when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        match std::env::var(API_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an API path like `api/v1/posts` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ApiConfig::default();
        assert_eq!(
            config.endpoint("api/v1/categories").unwrap().as_str(),
            "http://localhost:3001/api/v1/categories"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let config = ApiConfig::new("https://example.com/backend").unwrap();
        assert_eq!(
            config.endpoint("/api/v1/posts").unwrap().as_str(),
            "https://example.com/backend/api/v1/posts"
        );
    }

    #[test]
    fn test_trailing_slash_is_not_doubled() {
        let config = ApiConfig::new("https://example.com/backend/").unwrap();
        assert_eq!(config.base_url().as_str(), "https://example.com/backend/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiConfig::new("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { ref value, .. } if value == "not a url"));
    }
}
