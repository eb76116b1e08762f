/**
 * Server Configuration
 *
 * Loads the server configuration from environment variables, with defaults
 * suitable for local development.
 *
 * | Variable             | Default  |
 * |----------------------|----------|
 * | `SERVER_PORT`        | `8080`   |
 * | `DATABASE_URL`       | unset    |
 * | `JWT_SECRET`         | dev only |
 * | `IMAGE_DIR`          | `images` |
 * | `BCRYPT_COST`        | `12`     |
 * | `BROADCAST_CAPACITY` | `1000`   |
 *
 * Without `DATABASE_URL` the server keeps everything in memory. A value that
 * is present but malformed stops startup.
 */

use std::path::PathBuf;
use thiserror::Error;

use crate::backend::realtime::DEFAULT_CAPACITY;

/// Signing secret used when `JWT_SECRET` is not set
const DEVELOPMENT_SECRET: &str = "somesupersecretsecret";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// PostgreSQL connection URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    pub jwt_secret: String,
    /// Directory uploaded images are stored in and served from
    pub image_dir: PathBuf,
    pub bcrypt_cost: u32,
    /// Events buffered per real-time subscriber
    pub broadcast_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            database_url: None,
            jwt_secret: DEVELOPMENT_SECRET.to_string(),
            image_dir: PathBuf::from("images"),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            broadcast_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let jwt_secret = match var("JWT_SECRET") {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set. Using the development secret.");
                defaults.jwt_secret
            }
        };

        let database_url = var("DATABASE_URL");
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store.");
        }

        let bcrypt_cost = parse(var("BCRYPT_COST"), "BCRYPT_COST", "an integer between 4 and 31")?
            .unwrap_or(defaults.bcrypt_cost);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                name: "BCRYPT_COST",
                expected: "an integer between 4 and 31",
                value: bcrypt_cost.to_string(),
            });
        }

        let broadcast_capacity =
            parse(var("BROADCAST_CAPACITY"), "BROADCAST_CAPACITY", "a positive integer")?
                .unwrap_or(defaults.broadcast_capacity);
        if broadcast_capacity == 0 {
            return Err(ConfigError::Invalid {
                name: "BROADCAST_CAPACITY",
                expected: "a positive integer",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            port: parse(var("SERVER_PORT"), "SERVER_PORT", "a port number")?
                .unwrap_or(defaults.port),
            database_url,
            jwt_secret,
            image_dir: var("IMAGE_DIR").map(PathBuf::from).unwrap_or(defaults.image_dir),
            bcrypt_cost,
            broadcast_capacity,
        })
    }
}

fn parse<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
                name,
                expected,
                value: raw.clone(),
            })
        })
        .transpose()
}
