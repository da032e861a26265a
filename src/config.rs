use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    /// Binds a TCP listener on `Config::addr`.
    Standalone,
    /// Hands the router to the AWS Lambda runtime.
    Lambda,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value `{value}`")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub log_level: Level,
    pub runtime: Runtime,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(value) => parse("HOST", value)?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match lookup("PORT") {
            Some(value) => parse("PORT", value)?,
            None => DEFAULT_PORT,
        };
        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => parse("LOG_LEVEL", value)?,
            None => Level::INFO,
        };
        let runtime = match lookup("AWS_LAMBDA_RUNTIME_API") {
            Some(_) => Runtime::Lambda,
            None => Runtime::Standalone,
        };

        Ok(Config {
            addr: SocketAddr::new(host, port),
            log_level,
            runtime,
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
