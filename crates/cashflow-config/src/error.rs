use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Unknown config key `{0}` (expected currency-symbol, data-file or color)")]
    UnknownKey(String),

    #[error("Invalid value `{value}` for {key}")]
    InvalidValue { key: String, value: String },
}
