use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Requests per second allowed per client IP before throttling.
const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 10;
const DEFAULT_RATE_LIMIT_BURST: u32 = 30;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,

    /// Maximum number of waiting participants, unbounded when `None`.
    pub queue_capacity: Option<usize>,
    pub queue_allow_duplicates: bool,

    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            queue_capacity: optional("QUEUE_CAPACITY")?,
            queue_allow_duplicates: optional("QUEUE_ALLOW_DUPLICATES")?.unwrap_or(true),
            rate_limit_per_second: optional("RATE_LIMIT_PER_SECOND")?
                .unwrap_or(DEFAULT_RATE_LIMIT_PER_SECOND),
            rate_limit_burst: optional("RATE_LIMIT_BURST")?.unwrap_or(DEFAULT_RATE_LIMIT_BURST),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads and parses an optional variable; unset yields `None`, unparsable is an error.
fn optional<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}
