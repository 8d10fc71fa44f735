use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, str::FromStr};

use crate::ConfigError;

const DEFAULT_DATA_FILE: &str = "cashflow_data.json";

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional transaction data file. Defaults to `cashflow_data.json` in the working directory.
    pub data_file: Option<PathBuf>,

    #[serde(default = "Config::default_color")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            data_file: None,
            color: Self::default_color(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_color() -> bool {
        true
    }

    pub fn resolve_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Default config location: `<config dir>/cashflow/config.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cashflow")
            .join("config.json")
    }

    /// Applies a textual `value` to `key`.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            ConfigKey::CurrencySymbol => self.currency_symbol = value.to_string(),
            ConfigKey::DataFile => {
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            ConfigKey::Color => {
                self.color = parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
            }
        }
        Ok(())
    }
}

/// Names the settable configuration entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    CurrencySymbol,
    DataFile,
    Color,
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "currency-symbol" => Ok(ConfigKey::CurrencySymbol),
            "data-file" => Ok(ConfigKey::DataFile),
            "color" => Ok(ConfigKey::Color),
            _ => Err(ConfigError::UnknownKey(value.to_string())),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigKey::CurrencySymbol => "currency-symbol",
            ConfigKey::DataFile => "data-file",
            ConfigKey::Color => "color",
        };
        f.write_str(label)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
