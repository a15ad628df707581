use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use axum::http::HeaderValue;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_PORT: &str = "3001";
const DEFAULT_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub allowed_origin: HeaderValue,
    pub store_backend: StoreBackend,
    pub redis_url: String,
}

/// In-memory defaults for tests. [`Config::load`] defaults to Redis instead.
impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            allowed_origin: HeaderValue::from_static(DEFAULT_ORIGIN),
            store_backend: StoreBackend::Memory,
            redis_url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("PORT", DEFAULT_PORT)?,
            allowed_origin: try_load("CORS_ORIGIN", DEFAULT_ORIGIN)?,
            store_backend: try_load("STORE_BACKEND", "redis")?,
            redis_url: read_secret("REDIS_URL").unwrap_or_else(|| {
                info!("REDIS_URL not set, using default: {DEFAULT_REDIS_URL}");
                DEFAULT_REDIS_URL.to_string()
            }),
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");

            ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }
        })
}

/// Connection strings may carry credentials, so they are also accepted as docker secrets.
fn read_secret(secret_name: &str) -> Option<String> {
    if let Some(value) = var(secret_name) {
        return Some(value);
    }

    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .ok()
        .filter(|s| !s.is_empty())
}
