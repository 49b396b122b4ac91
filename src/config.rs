//! Configuration management for ynr.
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present) covering the HTTP listener, the public URL used for absolute
//! hyperlinks, API versioning and the dataset location.

use std::env;
use std::sync::OnceLock;

use url::Url;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// API version hyperlinks to elections are always reversed against.
pub const DEFAULT_API_VERSION: &str = "v0.9";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8000";

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base for absolute hyperlinks when a request carries no Host header.
    pub public_url: Url,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Versions accepted in the `/api/{version}/` path segment.
    pub allowed_versions: Vec<String>,
    /// Prefix prepended to stored image file names.
    pub media_url: String,
}

#[derive(Debug, Clone)]
pub struct DataConfig {
    /// JSON dataset loaded into the in-memory store at startup.
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            allowed_versions: vec![DEFAULT_API_VERSION.to_string()],
            media_url: "/media/".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn is_allowed_version(&self, version: &str) -> bool {
        self.allowed_versions.iter().any(|v| v == version)
    }
}

impl LoggingConfig {
    /// Read only the logging settings, so tracing can be installed before
    /// the rest of the configuration is parsed.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            format: parse_log_format(&env_or("LOG_FORMAT", "text")),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = env_or("PORT", &DEFAULT_PORT.to_string())
            .parse()
            .unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT, falling back to {}", DEFAULT_PORT);
                DEFAULT_PORT
            });

        Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port,
                public_url: parse_public_url(&env_or("PUBLIC_URL", DEFAULT_PUBLIC_URL)),
            },
            api: ApiConfig {
                allowed_versions: parse_versions(&env_or("API_VERSIONS", DEFAULT_API_VERSION)),
                media_url: env_or("MEDIA_URL", "/media/"),
            },
            data: DataConfig {
                path: env_or("DATA_PATH", "./data/ynr.json"),
            },
            logging: LoggingConfig::from_env(),
        }
    }
}

/// Parse a comma-separated version list, ignoring blanks.
/// An empty list falls back to the default API version.
pub fn parse_versions(raw: &str) -> Vec<String> {
    let versions: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect();

    if versions.is_empty() {
        vec![DEFAULT_API_VERSION.to_string()]
    } else {
        versions
    }
}

fn parse_public_url(raw: &str) -> Url {
    Url::parse(raw).unwrap_or_else(|e| {
        tracing::warn!("Invalid PUBLIC_URL {:?} ({}), using {}", raw, e, DEFAULT_PUBLIC_URL);
        // DEFAULT_PUBLIC_URL is a literal, known-valid URL.
        Url::parse(DEFAULT_PUBLIC_URL).expect("default public URL is valid")
    })
}

fn parse_log_format(raw: &str) -> LogFormat {
    match raw.to_lowercase().as_str() {
        "json" => LogFormat::Json,
        _ => LogFormat::Text,
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
