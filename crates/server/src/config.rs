use database::services::major::MajorDeletePolicy;
use std::{net::SocketAddr, str::FromStr};
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings, read from the environment at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: SocketAddr,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
    pub major_delete_policy: MajorDeletePolicy,
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            log::warn!("Ignoring unreadable .env file: {e}");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = parse(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(value) => parse_value("BIND_ADDRESS", value)?,
            None => parse_value("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.to_string())?,
        };

        let run_migrations = parse_flag(&lookup, "RUN_MIGRATIONS", true)?;
        let major_delete_policy = if parse_flag(&lookup, "MAJOR_DELETE_REQUIRES_CATEGORIES", false)? {
            MajorDeletePolicy::RequireCategories
        } else {
            MajorDeletePolicy::AllowEmpty
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_address,
            run_migrations,
            major_delete_policy,
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => parse_value(key, value),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
