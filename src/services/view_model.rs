use tracing::{debug, error, info};

use crate::api::transactions::{ApiError, NewTransaction, Transaction, TransactionId, TransactionType};
use crate::models::TotalsResult;
use crate::services::transaction_store::TransactionStore;
use crate::utils::format_amount;

/// Result of [`TransactionViewModel::add_transaction`]
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The form was incomplete; nothing was sent
    Declined,
    /// The store accepted the transaction. `reload_error` is set when the
    /// follow-up re-fetch failed and the snapshot is stale.
    Added {
        transaction: Transaction,
        reload_error: Option<ApiError>,
    },
}

/// In-memory snapshot of the store plus the totals derived from it.
///
/// The snapshot is only ever replaced wholesale by [`refresh`](Self::refresh).
/// Writes go to the store first and are followed by a full re-fetch; nothing
/// is inserted into or removed from the snapshot locally.
pub struct TransactionViewModel<S> {
    store: S,
    transactions: Vec<Transaction>,
}

impl<S: TransactionStore> TransactionViewModel<S> {
    /// Starts with an empty snapshot; call [`refresh`](Self::refresh) to load the store
    pub fn new(store: S) -> Self {
        Self {
            store,
            transactions: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current snapshot, in the order the store returned it
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Replace the snapshot with the store's current contents.
    ///
    /// On failure the previous snapshot is kept untouched.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        match self.store.list().await {
            Ok(transactions) => {
                debug!("Fetched {} transactions", transactions.len());
                self.transactions = transactions;
                Ok(())
            }
            Err(e) => {
                error!("Error fetching transactions: {}", e);
                Err(e)
            }
        }
    }

    /// Sum of credit amounts
    pub fn total_income(&self) -> f64 {
        self.sum_of(TransactionType::Credit)
    }

    /// Sum of debit amounts
    pub fn total_expense(&self) -> f64 {
        self.sum_of(TransactionType::Debit)
    }

    /// Credits minus debits
    pub fn total_balance(&self) -> f64 {
        self.transactions
            .iter()
            .fold(0.0, |acc, tx| acc + tx.signed_amount())
    }

    fn sum_of(&self, kind: TransactionType) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.kind == kind)
            .map(|tx| tx.amount)
            .sum()
    }

    pub fn compute_balance(&self) -> String {
        format_amount(self.total_balance())
    }

    pub fn compute_income(&self) -> String {
        format_amount(self.total_income())
    }

    pub fn compute_expense(&self) -> String {
        format_amount(self.total_expense())
    }

    pub fn summary(&self) -> TotalsResult {
        TotalsResult {
            balance: self.compute_balance(),
            income: self.compute_income(),
            expense: self.compute_expense(),
            entries: self.transactions.len(),
        }
    }

    /// Submit a new transaction from raw form input.
    ///
    /// Invalid input (blank description, amount that is not a non-negative
    /// number) is declined and never reaches the store. Valid input is sent to
    /// the store and the snapshot is re-fetched whether or not the create
    /// succeeded. `Err` means the store did not take the transaction; a failed
    /// re-fetch after a successful create is carried in [`AddOutcome::Added`].
    pub async fn add_transaction(
        &mut self,
        text: &str,
        amount: &str,
        kind: TransactionType,
    ) -> Result<AddOutcome, ApiError> {
        let Some(new_transaction) = NewTransaction::from_form(text, amount, kind) else {
            debug!("Declined incomplete transaction form");
            return Ok(AddOutcome::Declined);
        };

        let created = self.store.create(&new_transaction).await;
        match &created {
            Ok(tx) => info!("Added transaction {} ({} {:.2})", tx.id, tx.kind, tx.amount),
            Err(e) => error!("Error adding transaction: {}", e),
        }

        let refreshed = self.refresh().await;

        Ok(AddOutcome::Added {
            transaction: created?,
            reload_error: refreshed.err(),
        })
    }

    /// Delete a transaction by id, then re-fetch the snapshot.
    ///
    /// The id is not checked against the snapshot; the store decides whether it
    /// exists. The re-fetch happens even when the delete fails.
    pub async fn delete_transaction(&mut self, id: TransactionId) -> Result<(), ApiError> {
        let deleted = self.store.delete(id).await;
        match &deleted {
            Ok(()) => info!("Deleted transaction {}", id),
            Err(e) => error!("Error deleting transaction {}: {}", id, e),
        }

        let refreshed = self.refresh().await;

        deleted?;
        refreshed
    }
}
