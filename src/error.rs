//! Errors raised while assembling startup settings.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the settings file.
    Io(std::io::Error),
    /// The settings file is not valid YAML for `Settings`.
    Yaml(serde_yaml::Error),
    /// A flag or query parameter could not be parsed.
    InvalidValue { key: String, value: String },
    /// A value parsed but lies outside what the renderers accept.
    OutOfRange { key: &'static str, value: String },
    /// Initial source list is empty or too long.
    SourceCount(usize),
    /// The browser location could not be read.
    #[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
    Browser(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read settings file: {}", e),
            ConfigError::Yaml(e) => write!(f, "Failed to parse settings: {}", e),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value {:?} for {}", value, key)
            }
            ConfigError::OutOfRange { key, value } => {
                write!(f, "Value {} for {} is out of range", value, key)
            }
            ConfigError::SourceCount(n) => write!(
                f,
                "Expected between {} and {} wave sources, got {}",
                crate::sources::MIN_SOURCES,
                crate::sources::MAX_SOURCES,
                n
            ),
            ConfigError::Browser(msg) => write!(f, "Failed to read page location: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Yaml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e)
    }
}
