use chrono::{DateTime, NaiveDate, Utc};
use cashflow_domain::Month;

/// Clock abstracts access to the current timestamp so callers remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Returns the month containing `today()`.
    fn current_month(&self) -> Month {
        Month::containing(self.today())
    }
}
