//! Domain models for cash flow transactions and their schedules.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::ValidationError, month::Month};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
/// Direction of money relative to the ledger owner.
pub enum FlowKind {
    Inflow,
    Outflow,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::Inflow => "inflow",
            FlowKind::Outflow => "outflow",
        }
    }
}

impl FromStr for FlowKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "inflow" => Ok(FlowKind::Inflow),
            "outflow" => Ok(FlowKind::Outflow),
            other => Err(ValidationError::InvalidType(other.to_string())),
        }
    }
}

impl TryFrom<String> for FlowKind {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case", try_from = "String")]
/// Whether a transaction applies to a single month or a range of months.
pub enum RecurrenceKind {
    OneTime,
    Recurring,
}

impl RecurrenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceKind::OneTime => "one-time",
            RecurrenceKind::Recurring => "recurring",
        }
    }
}

impl FromStr for RecurrenceKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "one-time" => Ok(RecurrenceKind::OneTime),
            "recurring" => Ok(RecurrenceKind::Recurring),
            other => Err(ValidationError::InvalidRecurrence(other.to_string())),
        }
    }
}

impl TryFrom<String> for RecurrenceKind {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The months in which a transaction applies.
pub enum Schedule {
    OneTime { month: Month },
    /// Inclusive range; an absent end means the item is ongoing.
    Recurring { start: Month, end: Option<Month> },
}

impl Schedule {
    pub fn kind(&self) -> RecurrenceKind {
        match self {
            Schedule::OneTime { .. } => RecurrenceKind::OneTime,
            Schedule::Recurring { .. } => RecurrenceKind::Recurring,
        }
    }

    /// Returns true when the schedule covers `target`.
    ///
    /// A recurring range whose end precedes its start covers nothing.
    pub fn covers(&self, target: Month) -> bool {
        match *self {
            Schedule::OneTime { month } => month == target,
            Schedule::Recurring { start, end } => {
                start <= target && end.map_or(true, |end| end >= target)
            }
        }
    }
}

/// Unvalidated input for [`Transaction::new`].
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub id: Option<String>,
    pub description: String,
    pub amount: f64,
    pub kind: FlowKind,
    pub recurrence: RecurrenceKind,
    pub category: String,
    pub month: Option<Month>,
    pub start_month: Option<Month>,
    pub end_month: Option<Month>,
}

impl NewTransaction {
    /// Starts a one-time draft active in `month`.
    pub fn one_time(
        description: impl Into<String>,
        amount: f64,
        kind: FlowKind,
        category: impl Into<String>,
        month: Month,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            amount,
            kind,
            recurrence: RecurrenceKind::OneTime,
            category: category.into(),
            month: Some(month),
            start_month: None,
            end_month: None,
        }
    }

    /// Starts a recurring draft active from `start` onwards.
    pub fn recurring(
        description: impl Into<String>,
        amount: f64,
        kind: FlowKind,
        category: impl Into<String>,
        start: Month,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            amount,
            kind,
            recurrence: RecurrenceKind::Recurring,
            category: category.into(),
            month: None,
            start_month: Some(start),
            end_month: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn ending(mut self, end: Month) -> Self {
        self.end_month = Some(end);
        self
    }
}

/// A validated cash flow entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    id: String,
    description: String,
    amount: f64,
    kind: FlowKind,
    category: String,
    schedule: Schedule,
}

impl Transaction {
    /// Validates `draft` and builds the transaction, generating an id when none is given.
    pub fn new(draft: NewTransaction) -> Result<Self, ValidationError> {
        if !draft.amount.is_finite() || draft.amount < 0.0 {
            return Err(ValidationError::InvalidAmount(draft.amount));
        }
        let schedule = match draft.recurrence {
            RecurrenceKind::OneTime => {
                let month = draft.month.ok_or(ValidationError::MissingMonth)?;
                if draft.start_month.is_some() || draft.end_month.is_some() {
                    tracing::warn!(
                        description = %draft.description,
                        %month,
                        "one-time transaction carries start_month/end_month; ignoring them"
                    );
                }
                Schedule::OneTime { month }
            }
            RecurrenceKind::Recurring => {
                let start = draft.start_month.ok_or(ValidationError::MissingStartMonth)?;
                if let Some(month) = draft.month {
                    tracing::warn!(
                        description = %draft.description,
                        %month,
                        %start,
                        "recurring transaction carries month; ignoring it"
                    );
                }
                if let Some(end) = draft.end_month {
                    if end < start {
                        tracing::warn!(
                            description = %draft.description,
                            %start,
                            %end,
                            "recurring transaction ends before it starts and will never apply"
                        );
                    }
                }
                Schedule::Recurring {
                    start,
                    end: draft.end_month,
                }
            }
        };
        let id = match draft.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };
        Ok(Self {
            id,
            description: draft.description,
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            schedule,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn recurrence(&self) -> RecurrenceKind {
        self.schedule.kind()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// The single active month of a one-time transaction.
    pub fn month(&self) -> Option<Month> {
        match self.schedule {
            Schedule::OneTime { month } => Some(month),
            Schedule::Recurring { .. } => None,
        }
    }

    pub fn start_month(&self) -> Option<Month> {
        match self.schedule {
            Schedule::Recurring { start, .. } => Some(start),
            Schedule::OneTime { .. } => None,
        }
    }

    pub fn end_month(&self) -> Option<Month> {
        match self.schedule {
            Schedule::Recurring { end, .. } => end,
            Schedule::OneTime { .. } => None,
        }
    }

    /// Returns true when the transaction contributes to `target`.
    pub fn is_active_in(&self, target: Month) -> bool {
        self.schedule.covers(target)
    }
}

/// Flat, loosely typed shape of a transaction as exchanged with storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub recurrence: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub start_month: Option<String>,
    #[serde(default)]
    pub end_month: Option<String>,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = ValidationError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let kind = record.kind.parse::<FlowKind>()?;
        let recurrence = record.recurrence.parse::<RecurrenceKind>()?;
        Transaction::new(NewTransaction {
            id: record.id,
            description: record.description,
            amount: record.amount,
            kind,
            recurrence,
            category: record.category,
            month: parse_optional_month(record.month)?,
            start_month: parse_optional_month(record.start_month)?,
            end_month: parse_optional_month(record.end_month)?,
        })
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(txn: Transaction) -> Self {
        let month = txn.month().map(|m| m.to_string());
        let start_month = txn.start_month().map(|m| m.to_string());
        let end_month = txn.end_month().map(|m| m.to_string());
        Self {
            id: Some(txn.id),
            description: txn.description,
            amount: txn.amount,
            kind: txn.kind.as_str().to_string(),
            recurrence: txn.schedule.kind().as_str().to_string(),
            category: txn.category,
            month,
            start_month,
            end_month,
        }
    }
}

fn parse_optional_month(value: Option<String>) -> Result<Option<Month>, ValidationError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(raw.parse::<Month>()?)),
        _ => Ok(None),
    }
}
