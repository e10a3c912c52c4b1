//! Service settings read from the environment.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;
/// Default tracing filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Optional YAML rate card file. The built-in table is used when unset.
    pub rate_cards_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            rate_cards_path: None,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment, after loading `.env` if present.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `EARNINGS_HOST` | `0.0.0.0` |
    /// | `EARNINGS_PORT` | `8000` |
    /// | `EARNINGS_LOG_LEVEL` | `info` |
    /// | `EARNINGS_RATE_CARDS` | unset |
    pub fn load() -> EngineResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use courier_earnings::config::AppConfig;
    ///
    /// let config = AppConfig::from_lookup(|name| match name {
    ///     "EARNINGS_PORT" => Some("9100".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.port, 9100);
    /// assert_eq!(config.host, "0.0.0.0");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("EARNINGS_HOST").unwrap_or(defaults.host);
        let port = match lookup("EARNINGS_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| EngineError::InvalidSetting {
                    name: "EARNINGS_PORT".to_string(),
                    message: format!("'{raw}' is not a valid port ({e})"),
                })?,
            None => defaults.port,
        };
        let log_level = lookup("EARNINGS_LOG_LEVEL").unwrap_or(defaults.log_level);
        let rate_cards_path = lookup("EARNINGS_RATE_CARDS")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            log_level,
            rate_cards_path,
        })
    }

    /// Resolves the bind address.
    pub fn socket_addr(&self) -> EngineResult<SocketAddr> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self.host.parse().map_err(|_| EngineError::InvalidSetting {
            name: "EARNINGS_HOST".to_string(),
            message: format!("'{}' is not an IP address", self.host),
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}
