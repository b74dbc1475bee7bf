// src/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub public_dir: PathBuf,
    pub session_ttl: Duration,
    pub purge_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            public_dir: PathBuf::from("public"),
            session_ttl: Duration::from_secs(1800),
            purge_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let bind_address = env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address);
        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);
        let session_ttl = secs_from_env("SESSION_TTL_SECS")?.unwrap_or(defaults.session_ttl);
        let purge_interval =
            secs_from_env("PURGE_INTERVAL_SECS")?.unwrap_or(defaults.purge_interval);

        let config = Self { bind_address, public_dir, session_ttl, purge_interval };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bind_address.trim().is_empty() {
            return Err(AppError::Config("BIND_ADDRESS must not be empty".to_string()));
        }
        if self.session_ttl.is_zero() {
            return Err(AppError::Config("SESSION_TTL_SECS must be at least 1".to_string()));
        }
        if self.purge_interval.is_zero() {
            return Err(AppError::Config("PURGE_INTERVAL_SECS must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn secs_from_env(key: &str) -> Result<Option<Duration>> {
    match env::var(key) {
        Ok(raw) => parse_secs(key, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_secs(key: &str, raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| AppError::Config(format!("{key} must be a whole number of seconds")))
}
