use std::future::Future;

use crate::api::transactions::{
    ApiError, NewTransaction, Transaction, TransactionId, TransactionsClient,
};

/// The remote collaborator holding the authoritative transaction records.
///
/// The view-model only ever talks to the store through this trait, which keeps
/// it testable against an in-process store.
pub trait TransactionStore {
    /// Every stored transaction, in store order
    fn list(&self) -> impl Future<Output = Result<Vec<Transaction>, ApiError>> + Send;

    /// Create a transaction; `id` and `date` are assigned by the store
    fn create(
        &self,
        new_transaction: &NewTransaction,
    ) -> impl Future<Output = Result<Transaction, ApiError>> + Send;

    fn delete(&self, id: TransactionId) -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl TransactionStore for TransactionsClient {
    async fn list(&self) -> Result<Vec<Transaction>, ApiError> {
        self.list_transactions().await
    }

    async fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        self.create_transaction(new_transaction).await
    }

    async fn delete(&self, id: TransactionId) -> Result<(), ApiError> {
        self.delete_transaction(id).await
    }
}
