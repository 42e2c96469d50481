use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} must be a valid number")]
    Invalid(&'static str),
    #[error("{0} must be between {1} and {2}")]
    OutOfRange(&'static str, i64, i64),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expires_in_days: i64,
    pub port: u16,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 3001;
    pub const DEFAULT_JWT_EXPIRES_IN_DAYS: i64 = 7;
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    pub const MAX_JWT_EXPIRES_IN_DAYS: i64 = 3650;

    /// Reads the configuration from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a local `.env` file.
    pub fn init() -> Result<Config, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let jwt_expires_in_days = parse_or(
            lookup("JWT_EXPIRES_IN_DAYS"),
            "JWT_EXPIRES_IN_DAYS",
            Self::DEFAULT_JWT_EXPIRES_IN_DAYS,
        )?;
        if !(1..=Self::MAX_JWT_EXPIRES_IN_DAYS).contains(&jwt_expires_in_days) {
            return Err(ConfigError::OutOfRange(
                "JWT_EXPIRES_IN_DAYS",
                1,
                Self::MAX_JWT_EXPIRES_IN_DAYS,
            ));
        }
        let port = parse_or(lookup("PORT"), "PORT", Self::DEFAULT_PORT)?;
        let database_max_connections = parse_or(
            lookup("DATABASE_MAX_CONNECTIONS"),
            "DATABASE_MAX_CONNECTIONS",
            Self::DEFAULT_MAX_CONNECTIONS,
        )?;

        Ok(Config {
            database_url,
            database_max_connections,
            jwt_secret,
            jwt_expires_in_days,
            port,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}
