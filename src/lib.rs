#![doc(test(attr(deny(warnings))))]

//! Cashflow records one-time and recurring cash flow entries and reports
//! monthly inflows, outflows and balances from a flat JSON store.

pub mod cli;
pub mod errors;
pub mod utils;

pub use cashflow_config as config;
pub use cashflow_core as core;
pub use cashflow_domain as domain;
pub use cashflow_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing. `verbose` raises this crate family to debug level.
pub fn init(verbose: bool) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(verbose);
        tracing::debug!("Cashflow tracing initialized.");
    });
}
