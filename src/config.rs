//! Configuration for the ftp-courier binary
//!
//! The library itself is configured through `FtpClient` setters; this module
//! only feeds the binary from an optional TOML file plus environment variable
//! overrides.

use serde::Deserialize;
use std::env;

use crate::client::DEFAULT_FTP_PORT;
use crate::error::{FtpClientError, Result};

/// Configuration for one ftp-courier invocation
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Login configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// FTP server hostname or IP address
    pub host: String,

    /// FTP server port number
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

fn default_port() -> u16 {
    DEFAULT_FTP_PORT
}

impl ClientConfig {
    /// Load configuration from a TOML file (optional) with environment
    /// variable overrides applied on top
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let file = config::File::with_name(config_path.unwrap_or("ftp-courier")).required(false);

        let mut loaded: ClientConfig = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", i64::from(DEFAULT_FTP_PORT))?
            .add_source(file)
            .build()?
            .try_deserialize()?;

        loaded.apply_env_overrides()?;
        loaded.validate()?;

        Ok(loaded)
    }

    /// Apply environment variable overrides to config
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = env::var("FTP_COURIER_HOST") {
            self.server.host = host;
        }

        if let Ok(port_str) = env::var("FTP_COURIER_PORT") {
            self.server.port = port_str.parse().map_err(|_| {
                FtpClientError::InvalidConfigValue(
                    "FTP_COURIER_PORT must be a valid port number".to_string(),
                )
            })?;
        }

        if let Ok(username) = env::var("FTP_COURIER_USER") {
            self.auth.username = username;
        }

        if let Ok(password) = env::var("FTP_COURIER_PASSWORD") {
            self.auth.password = password;
        }

        Ok(())
    }

    /// Validate the basic configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(FtpClientError::InvalidConfigValue(
                "Host cannot be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(FtpClientError::InvalidConfigValue(
                "Port cannot be 0".to_string(),
            ));
        }

        if self.auth.username.is_empty() != self.auth.password.is_empty() {
            return Err(FtpClientError::InvalidConfigValue(
                "Username and password must be set together".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: DEFAULT_FTP_PORT,
            },
            auth: AuthConfig::default(),
        }
    }
}

impl std::fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ftp-courier config - Server: {}:{}, User: {}",
            self.server.host,
            self.server.port,
            if self.auth.username.is_empty() {
                "<none>"
            } else {
                &self.auth.username
            }
        )
    }
}
