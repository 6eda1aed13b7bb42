use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.gismeteo.net/v3/weather";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{key} must be true or false, got {value:?}")]
    InvalidBool { key: &'static str, value: String },

    #[error("BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(#[from] std::net::AddrParseError),

    #[error("failed to build upstream HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct Config {
    pub gismeteo_token: String,
    pub gismeteo_base_url: String,
    /// Skip certificate chain and hostname checks on the upstream connection.
    pub accept_invalid_certs: bool,
    pub bind_addr: SocketAddr,
    pub log_level: String,
}

// The token stays out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gismeteo_token", &"<redacted>")
            .field("gismeteo_base_url", &self.gismeteo_base_url)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gismeteo_token = lookup("GISMETEO_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing("GISMETEO_TOKEN"))?;

        let gismeteo_base_url = lookup("GISMETEO_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let accept_invalid_certs = match lookup("GISMETEO_ACCEPT_INVALID_CERTS") {
            Some(value) => parse_bool("GISMETEO_ACCEPT_INVALID_CERTS", &value)?,
            None => true,
        };

        let bind_addr: SocketAddr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()?;

        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase();

        Ok(Config {
            gismeteo_token,
            gismeteo_base_url,
            accept_invalid_certs,
            bind_addr,
            log_level,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
