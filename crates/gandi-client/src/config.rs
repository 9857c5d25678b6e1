use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ClientError, Result};

/// API key used when none is given, mirroring the default argument of the
/// original gandi client.
pub const DEFAULT_API_KEY: &str = "default";

/// gandi client configuration (the endpoint).
///
/// Built once and handed to [`crate::GandiClient`]; the client never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Service address (host:port), without scheme
    pub host: String,
    /// API key, sent as the `x-api-key` header on every request
    pub api_key: String,
    /// Use https instead of plain http
    pub use_tls: bool,
    /// Per-request timeout; `None` leaves the HTTP library default in place
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost:8080".to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            use_tls: false,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Set API key
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set TLS mode
    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    /// Set per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Scheme plus host, e.g. `http://localhost:8080`.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{}://{}", scheme, self.host)
    }

    /// Reject configurations that can never produce a request.
    ///
    /// Only emptiness is checked; an unreachable host fails at request time.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ClientError::Configuration("Host must not be empty".to_string()));
        }
        if self.host.contains("://") {
            return Err(ClientError::Configuration(format!(
                "Host '{}' must not include a scheme; use with_tls to select https",
                self.host
            )));
        }
        Ok(())
    }
}

/// Serializable client configuration for saving/loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableClientConfig {
    /// Service address (host:port)
    pub host: String,
    /// API key for authentication
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Use TLS for connection
    #[serde(default)]
    pub use_tls: bool,
    /// Request timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

impl From<&ClientConfig> for SerializableClientConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            host: config.host.clone(),
            api_key: config.api_key.clone(),
            use_tls: config.use_tls,
            timeout_ms: config.timeout.map(|t| t.as_millis() as u64),
        }
    }
}

impl From<SerializableClientConfig> for ClientConfig {
    fn from(config: SerializableClientConfig) -> Self {
        Self {
            host: config.host,
            api_key: config.api_key,
            use_tls: config.use_tls,
            timeout: config.timeout_ms.map(Duration::from_millis),
        }
    }
}

impl SerializableClientConfig {
    /// Load client configuration from a file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> std::result::Result<Self, std::io::Error> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, format!("Failed to parse config: {}", e))
        })
    }

    /// Save client configuration to a file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::result::Result<(), std::io::Error> {
        let contents = toml::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(path, contents)
    }
}

impl ClientConfig {
    /// Load configuration from a file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> std::result::Result<Self, std::io::Error> {
        let config = SerializableClientConfig::load_from_file(path)?;
        Ok(config.into())
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::result::Result<(), std::io::Error> {
        let config = SerializableClientConfig::from(self);
        config.save_to_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "localhost:8080");
        assert_eq!(config.api_key, "default");
        assert!(!config.use_tls);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_client_config_new() {
        let config = ClientConfig::new("localhost:19530");
        assert_eq!(config.host, "localhost:19530");
        assert_eq!(config.api_key, DEFAULT_API_KEY);
        assert_eq!(config.base_url(), "http://localhost:19530");
    }

    #[test]
    fn test_client_config_with_tls() {
        let config = ClientConfig::new("gandi.example.com").with_tls(true);
        assert!(config.use_tls);
        assert_eq!(config.base_url(), "https://gandi.example.com");
    }

    #[test]
    fn test_client_config_with_api_key_and_timeout() {
        let config = ClientConfig::default()
            .with_api_key("test-key")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let err = ClientConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn test_validate_rejects_scheme_in_host() {
        let err = ClientConfig::new("http://localhost:8080").validate().unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
        assert!(ClientConfig::new("localhost:8080").validate().is_ok());
    }

    #[test]
    fn test_client_config_save_and_load() -> std::result::Result<(), std::io::Error> {
        let config = ClientConfig::new("gandi.internal:8080")
            .with_api_key("test-key")
            .with_tls(true)
            .with_timeout(Duration::from_secs(30));

        let temp_file = NamedTempFile::new()?;
        let path = temp_file.path().to_owned();

        config.save_to_file(&path)?;

        let contents = std::fs::read_to_string(&path)?;
        assert!(contents.contains("host"));
        assert!(contents.contains("api_key"));
        assert!(contents.contains("use_tls"));
        assert!(contents.contains("timeout_ms"));

        let loaded_config = ClientConfig::load_from_file(&path)?;
        assert_eq!(loaded_config, config);

        Ok(())
    }

    #[test]
    fn test_sub_second_timeout_survives_save_and_load() -> std::result::Result<(), std::io::Error> {
        let config = ClientConfig::new("localhost:8080").with_timeout(Duration::from_millis(500));

        let temp_file = NamedTempFile::new()?;
        config.save_to_file(temp_file.path())?;

        let contents = std::fs::read_to_string(temp_file.path())?;
        assert!(contents.contains("timeout_ms = 500"));

        let loaded = ClientConfig::load_from_file(temp_file.path())?;
        assert_eq!(loaded.timeout, Some(Duration::from_millis(500)));
        Ok(())
    }

    #[test]
    fn test_load_minimal_file_uses_defaults() -> std::result::Result<(), std::io::Error> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "host = \"localhost:19530\"")?;

        let loaded = ClientConfig::load_from_file(temp_file.path())?;
        assert_eq!(loaded, ClientConfig::new("localhost:19530"));
        Ok(())
    }

    #[test]
    fn test_load_invalid_file_is_invalid_data() -> std::result::Result<(), std::io::Error> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "host = ")?;

        let err = ClientConfig::load_from_file(temp_file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        Ok(())
    }
}
