use std::env;

use thiserror::Error;

const HOST: &str = "STREET_LINES_HOST";
const PORT: &str = "STREET_LINES_PORT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: PORT, value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}
