//! Injected transport configuration.
//!
//! The host application loads its own configuration; this layer only
//! receives the resulting values and owns no configuration source.

use serde::Deserialize;

/// Base settings for the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpConfig {
    /// Base URL prepended to every request path.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_ten_seconds() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, 10);
        assert!(config.base_url.is_empty());
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let config: HttpConfig =
            serde_json::from_str(r#"{"baseUrl": "https://mes.example.com/api"}"#).unwrap();
        assert_eq!(config.base_url, "https://mes.example.com/api");
        assert_eq!(config.timeout, 10);
    }
}
