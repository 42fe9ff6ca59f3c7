use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ELASTICSEARCH_HOST: &str = "http://localhost:9200";
pub const DEFAULT_ELASTICSEARCH_TEST_HOST: &str = "http://localhost:9201";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngineConfig {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub search_engine: SearchEngineConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `RUST_ENV=test` points the service at the isolated test engine.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "PORT",
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };

        let (url_key, url_default) = if environment == "test" {
            ("ELASTICSEARCH_TEST_HOST", DEFAULT_ELASTICSEARCH_TEST_HOST)
        } else {
            ("ELASTICSEARCH_HOST", DEFAULT_ELASTICSEARCH_HOST)
        };
        let url = lookup(url_key).unwrap_or_else(|| url_default.to_string());

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: url_key,
                value: url,
            });
        }

        Ok(Self {
            environment,
            host,
            port,
            search_engine: SearchEngineConfig { url },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
