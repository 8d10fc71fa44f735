//! cashflow-domain
//!
//! Pure domain models (Month, Transaction and their enums).
//! No I/O, no CLI, no storage. Only data types and construction rules.

pub mod error;
pub mod month;
pub mod transaction;

pub use error::*;
pub use month::*;
pub use transaction::*;
