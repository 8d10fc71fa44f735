use thiserror::Error;

/// Raised when a month string is not a valid `YYYY-MM` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month `{input}`: expected YYYY-MM")]
pub struct MonthParseError {
    pub input: String,
}

impl MonthParseError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Names the construction rule a transaction violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("type must be 'inflow' or 'outflow' (got `{0}`)")]
    InvalidType(String),
    #[error("recurrence must be 'one-time' or 'recurring' (got `{0}`)")]
    InvalidRecurrence(String),
    #[error("one-time transactions require a month (YYYY-MM)")]
    MissingMonth,
    #[error("recurring transactions require start_month (YYYY-MM)")]
    MissingStartMonth,
    #[error("amount must be a finite, non-negative number (got {0})")]
    InvalidAmount(f64),
    #[error(transparent)]
    InvalidMonth(#[from] MonthParseError),
}
