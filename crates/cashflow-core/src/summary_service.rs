//! Month activity resolution and monthly cash flow aggregation.

use cashflow_domain::{FlowKind, Month, Transaction};
use serde::Serialize;

/// Cash position for one month, derived from the active transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: Month,
    pub opening_balance: f64,
    pub inflows: f64,
    pub outflows: f64,
    pub net: f64,
    pub closing_balance: f64,
    /// Contributing transactions, in collection order.
    pub transactions: Vec<Transaction>,
}

/// Returns true when `txn` applies to `target`.
///
/// One-time entries match their month exactly; recurring entries match every
/// month between `start_month` and the optional `end_month`, both inclusive.
pub fn is_active_in_month(txn: &Transaction, target: Month) -> bool {
    txn.is_active_in(target)
}

/// Transactions from `transactions` that apply to `target`, order preserved.
pub fn active_in_month<'a, I>(transactions: I, target: Month) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|txn| is_active_in_month(txn, target))
        .collect()
}

/// Aggregates the transactions active in `target` on top of `opening_balance`.
pub fn calculate_summary(
    transactions: &[Transaction],
    target: Month,
    opening_balance: f64,
) -> MonthlySummary {
    let active: Vec<Transaction> = active_in_month(transactions, target)
        .into_iter()
        .cloned()
        .collect();
    let inflows = total_for(&active, FlowKind::Inflow);
    let outflows = total_for(&active, FlowKind::Outflow);
    let net = inflows - outflows;
    MonthlySummary {
        month: target,
        opening_balance,
        inflows,
        outflows,
        net,
        closing_balance: opening_balance + net,
        transactions: active,
    }
}

fn total_for(transactions: &[Transaction], kind: FlowKind) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind() == kind)
        .fold(0.0, |total, txn| total + txn.amount())
}

/// Groups the summary operations behind the service naming used by callers.
pub struct SummaryService;

impl SummaryService {
    pub fn summarize(
        transactions: &[Transaction],
        target: Month,
        opening_balance: f64,
    ) -> MonthlySummary {
        tracing::debug!(
            month = %target,
            records = transactions.len(),
            "calculating monthly summary"
        );
        calculate_summary(transactions, target, opening_balance)
    }
}
