//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines the defaults for
//! the listen address, the cross-origin policy, logging and the location of the
//! issue document. `AppConfig` is the root configuration struct.

use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file, relative to the crate directory
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Issue document, relative to the crate directory. Not configurable.
pub const DATA_FILE: &str = "data/issues.json";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "fixit_api=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Message returned by the liveness probe on `/`
pub const LIVENESS_MESSAGE: &str = "FixIt API is running";

/// Default listen host
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Absolute path of the issue document next to the server's sources.
pub fn data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_FILE)
}

/// Absolute path of the default configuration file. Shares its base with
/// `data_path`, so neither depends on the working directory.
pub fn default_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Cross-origin policy
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Cross-origin resource sharing configuration.
///
/// The default is fully permissive: any origin, method and header, with
/// credentials allowed.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Attach the CORS layer at all (default: true)
    #[serde(default = "CorsConfig::default_enabled")]
    pub enabled: bool,
    /// Allow credentialed requests (default: true)
    #[serde(default = "CorsConfig::default_allow_credentials")]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            allow_credentials: Self::default_allow_credentials(),
        }
    }
}

impl CorsConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_allow_credentials() -> bool {
        true
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load the named file (relative paths resolve against the working
    /// directory), or fall back to `default_config_path` and then to built-in
    /// defaults when no file was named.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = default_config_path();
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;

        match config.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unknown logging.format '{}', expected \"text\" or \"json\"",
                    other
                )))
            }
        }

        Ok(config)
    }

    /// Socket address string for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8000);
        assert!(config.cors.enabled);
        assert!(config.cors.allow_credentials);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [http]
            port = 9090

            [cors]
            allow_credentials = false

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.listen_addr(), "127.0.0.1:9090");
        assert!(config.cors.enabled);
        assert!(!config.cors.allow_credentials);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = AppConfig::from_toml("[http\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nhost = \"0.0.0.0\"\nport = 3000").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = AppConfig::resolve(Some("/nonexistent/fixit.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_default_config_shares_base_with_data() {
        let config_path = default_config_path();
        assert!(config_path.is_absolute());
        assert_eq!(
            config_path.parent().and_then(Path::parent),
            data_path().parent().and_then(Path::parent)
        );

        // The bundled file is found regardless of the working directory.
        assert!(config_path.exists());
        let config = AppConfig::resolve(None).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_data_path_is_under_crate_dir() {
        let path = data_path();
        assert!(path.is_absolute());
        assert!(path.ends_with("data/issues.json"));
    }
}
