//! cashflow-core
//!
//! Business logic for the cash flow ledger: month activity, monthly summaries
//! and the transaction workflow over an abstract store.
//! Depends on cashflow-domain. No CLI, no terminal I/O, no concrete storage.

pub mod error;
pub mod format;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod transaction_service;

pub use error::CoreError;
pub use storage::TransactionStore;
pub use summary_service::*;
pub use time::Clock;
pub use transaction_service::*;
