use cashflow_domain::Transaction;

use crate::CoreError;

/// Abstraction over flat record stores holding the ordered transaction collection.
pub trait TransactionStore {
    /// Returns every stored transaction in insertion order. A missing store is empty.
    fn load(&self) -> Result<Vec<Transaction>, CoreError>;

    /// Replaces the stored collection with `transactions`.
    fn save(&self, transactions: &[Transaction]) -> Result<(), CoreError>;

    /// Removes the whole collection, returning whether anything was stored.
    fn clear(&self) -> Result<bool, CoreError>;

    /// Appends one transaction to the end of the collection.
    fn append(&self, transaction: Transaction) -> Result<(), CoreError> {
        let mut transactions = self.load()?;
        transactions.push(transaction);
        self.save(&transactions)
    }
}
