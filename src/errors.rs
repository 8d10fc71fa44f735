use std::result::Result as StdResult;

use cashflow_config::ConfigError;
use cashflow_core::CoreError;
use cashflow_domain::{MonthParseError, ValidationError};
use thiserror::Error;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = StdResult<T, CliError>;

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Core(CoreError::Validation(err))
    }
}

impl From<MonthParseError> for CliError {
    fn from(err: MonthParseError) -> Self {
        CliError::Core(CoreError::Format(err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Core(CoreError::Serde(err.to_string()))
    }
}
