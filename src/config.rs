// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    biscuit_private_key: String,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    notifier_capacity: usize,
    allow_empty_rejection_reason: bool,
    admin: Option<AdminSeed>,
}

/// Credentials of the administrator account created or refreshed at startup.
#[derive(Clone, Debug)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://berita.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_NOTIFIER_CAPACITY: usize = 128;

fn parse_number<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got '{value}'"))),
        None => Ok(default),
    }
}

fn parse_flag(raw: Option<String>) -> bool {
    raw.is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

impl AppConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset and empty values
    /// are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let biscuit_private_key = get("BISCUIT_ROOT_PRIVATE_KEY")
            .ok_or(ConfigError::Missing("BISCUIT_ROOT_PRIVATE_KEY"))?;

        if biscuit_private_key.len() != 64
            || !biscuit_private_key.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid(
                "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
            ));
        }

        let token_ttl_secs = parse_number(
            "TOKEN_TTL_SECONDS",
            get("TOKEN_TTL_SECONDS"),
            DEFAULT_TOKEN_TTL_SECS,
        )?;
        if token_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "TOKEN_TTL_SECONDS must be positive".into(),
            ));
        }

        let notifier_capacity = parse_number(
            "NOTIFIER_CAPACITY",
            get("NOTIFIER_CAPACITY"),
            DEFAULT_NOTIFIER_CAPACITY,
        )?;
        if notifier_capacity == 0 {
            return Err(ConfigError::Invalid(
                "NOTIFIER_CAPACITY must be positive".into(),
            ));
        }

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let admin = match (get("ADMIN_USERNAME"), get("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminSeed { username, password }),
            (None, None) => None,
            _ => {
                return Err(ConfigError::Invalid(
                    "ADMIN_USERNAME and ADMIN_PASSWORD must be set together".into(),
                ));
            }
        };

        Ok(Self {
            database_url,
            listen_addr,
            biscuit_private_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            notifier_capacity,
            allow_empty_rejection_reason: parse_flag(get("MODERATION_ALLOW_EMPTY_REASON")),
            admin,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn biscuit_private_key(&self) -> &str {
        &self.biscuit_private_key
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Empty means any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn notifier_capacity(&self) -> usize {
        self.notifier_capacity
    }

    pub fn allow_empty_rejection_reason(&self) -> bool {
        self.allow_empty_rejection_reason
    }

    pub fn admin(&self) -> Option<&AdminSeed> {
        self.admin.as_ref()
    }
}
