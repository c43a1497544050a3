use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: Option<u16>,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub smtp: SmtpConfig,
    /// Inbox that receives enquiries.
    pub contact_to: String,
    /// Sender address the relay is allowed to send as.
    pub contact_from: String,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub frontend_url: Option<String>,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        let port = match optional("SMTP_PORT") {
            Some(raw) => Some(raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "SMTP_PORT",
                reason: e.to_string(),
            })?),
            None => None,
        };

        let bind_addr = optional("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        Ok(Self {
            smtp: SmtpConfig {
                host: required("SMTP_HOST")?,
                port,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            },
            contact_to: required("CONTACT_TO")?,
            contact_from: required("CONTACT_FROM")?,
            bind_addr,
            static_dir: PathBuf::from(
                optional("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            frontend_url: optional("FRONTEND_URL"),
            sentry_dsn: optional("SENTRY_DSN"),
        })
    }
}
