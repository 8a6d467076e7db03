//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through `from_lookup`, which takes the variable source as a
//! closure. `from_env` plugs in the process environment; tests plug in a map
//! and never touch global state. Unset or empty variables fall back to their
//! defaults, set-but-invalid values are errors.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8080";
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GATEWAY_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Large enough for scanned proof documents.
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl GatewayTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Gateway origin without a trailing slash.
    pub gateway_url: String,
    pub timeouts: GatewayTimeouts,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `GATEWAY_URL`: default `http://localhost:8080`
    /// - `GATEWAY_TIMEOUT_SECS`: default 30
    /// - `GATEWAY_CONNECT_TIMEOUT_SECS`: default 5
    /// - `MAX_BODY_BYTES`: default 10 MiB
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for any variable that is set but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
                var: "BIND_ADDR",
                value: raw.clone(),
                reason: "expected an IP address",
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let gateway_url = parse_gateway_url(get("GATEWAY_URL"))?;
        let timeouts = GatewayTimeouts {
            request_secs: parse_or(get("GATEWAY_TIMEOUT_SECS"), "GATEWAY_TIMEOUT_SECS", DEFAULT_GATEWAY_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                get("GATEWAY_CONNECT_TIMEOUT_SECS"),
                "GATEWAY_CONNECT_TIMEOUT_SECS",
                DEFAULT_GATEWAY_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let max_body_bytes = parse_or(get("MAX_BODY_BYTES"), "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;

        Ok(Self { bind_addr, port, gateway_url, timeouts, max_body_bytes })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value, reason: "expected a non-negative integer" }),
        None => Ok(default),
    }
}

fn parse_gateway_url(raw: Option<String>) -> Result<String, ConfigError> {
    let value = raw.unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_owned());
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "GATEWAY_URL", value, reason: "expected an http(s) URL" });
    }
    Ok(value.trim_end_matches('/').to_owned())
}
