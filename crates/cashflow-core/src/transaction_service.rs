//! Add, list, summarize and reset workflows over a [`TransactionStore`].

use cashflow_domain::{Month, NewTransaction, Transaction};

use crate::{
    storage::TransactionStore,
    summary_service::{active_in_month, MonthlySummary, SummaryService},
    CoreError,
};

/// Coordinates validation and persistence of ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates `draft`, appends it to the store and returns the stored record.
    ///
    /// Nothing is written when validation fails.
    pub fn add<S>(store: &S, draft: NewTransaction) -> Result<Transaction, CoreError>
    where
        S: TransactionStore + ?Sized,
    {
        let transaction = Transaction::new(draft)?;
        store.append(transaction.clone())?;
        tracing::info!(
            id = transaction.id(),
            kind = %transaction.kind(),
            recurrence = %transaction.recurrence(),
            "transaction added"
        );
        Ok(transaction)
    }

    /// Lists stored transactions, optionally only those active in `month`.
    pub fn list<S>(store: &S, month: Option<Month>) -> Result<Vec<Transaction>, CoreError>
    where
        S: TransactionStore + ?Sized,
    {
        let transactions = store.load()?;
        Ok(match month {
            Some(month) => active_in_month(&transactions, month)
                .into_iter()
                .cloned()
                .collect(),
            None => transactions,
        })
    }

    /// Loads the collection and summarizes `month` from `opening_balance`.
    pub fn summarize<S>(
        store: &S,
        month: Month,
        opening_balance: f64,
    ) -> Result<MonthlySummary, CoreError>
    where
        S: TransactionStore + ?Sized,
    {
        let transactions = store.load()?;
        Ok(SummaryService::summarize(&transactions, month, opening_balance))
    }

    /// Drops every stored transaction. Returns false when there was nothing to clear.
    pub fn reset<S>(store: &S) -> Result<bool, CoreError>
    where
        S: TransactionStore + ?Sized,
    {
        let cleared = store.clear()?;
        tracing::info!(cleared, "transaction store reset");
        Ok(cleared)
    }
}
