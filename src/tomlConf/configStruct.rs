use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    ConfigFile,
    Deserializer,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::ConfigFile => f.write_str("ConfigError: cannot read config file"),
            ConfigError::Deserializer => f.write_str("ConfigError: invalid config file"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLevel {
    Info,
    Debug,
    Warn,
    Error,
    Trace,
}

impl std::fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<ErrorLevel> for LevelFilter {
    fn from(level: ErrorLevel) -> Self {
        match level {
            ErrorLevel::Info => LevelFilter::Info,
            ErrorLevel::Debug => LevelFilter::Debug,
            ErrorLevel::Warn => LevelFilter::Warn,
            ErrorLevel::Error => LevelFilter::Error,
            ErrorLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Main {
    pub error_level: Option<ErrorLevel>,
    pub cloud_url: Option<String>,
    pub local_link_name: Option<String>,
    pub cloud_link_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct ShortcutsConfig {
    #[serde(default)]
    pub main: Main,
}
