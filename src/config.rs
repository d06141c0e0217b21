use log::info;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid value {value:?} for {key}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub options_path: PathBuf,
    pub submissions_path: PathBuf,
    pub public_dir: PathBuf,
}

impl Config {
    // Load from the process environment (after .env has been applied)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind: load(&lookup, "BALLOT_BIND", "0.0.0.0")?,
            port: load(&lookup, "BALLOT_PORT", "8280")?,
            options_path: load(&lookup, "BALLOT_OPTIONS_PATH", "data/options.json")?,
            submissions_path: load(&lookup, "BALLOT_SUBMISSIONS_PATH", "data/submissions.json")?,
            public_dir: load(&lookup, "BALLOT_PUBLIC_DIR", "public")?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError {
            key,
            message: e.to_string(),
            value,
        }),
    }
}
