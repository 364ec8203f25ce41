pub mod stdio;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_filter_directives, Validate};
use std::env;

pub use stdio::StdIo;

pub const DEFAULT_MESSAGE_KEY: &str = "message";
pub const DEFAULT_MESSAGE: &str = "No message";
pub const DEFAULT_PREFIX: &str = "Processed: ";

/// Shape of the result message. Fixed at build time; not exposed as flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    pub message_key: String,
    pub default_message: String,
    pub prefix: String,
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            message_key: DEFAULT_MESSAGE_KEY.to_string(),
            default_message: DEFAULT_MESSAGE.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl ConfigProvider for FunctionConfig {
    fn message_key(&self) -> &str {
        &self.message_key
    }

    fn default_message(&self) -> &str {
        &self.default_message
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// Unknown names fall back to compact output.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Stderr logging settings, taken from `RUST_LOG` and `LOG_FORMAT`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: Option<String>,
    pub format: LogFormat,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            filter: lookup("RUST_LOG").filter(|value| !value.trim().is_empty()),
            format: lookup("LOG_FORMAT")
                .map(|value| LogFormat::parse(&value))
                .unwrap_or_default(),
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<()> {
        match &self.filter {
            Some(directives) => validate_filter_directives("RUST_LOG", directives),
            None => Ok(()),
        }
    }
}
