use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::api::transactions::{
    ApiError, NewTransaction, Transaction, TransactionId, TransactionType,
};
use crate::services::TransactionStore;

/// In-process store with failure switches and call counters
#[derive(Default)]
pub(crate) struct MemoryStore {
    transactions: Mutex<Vec<Transaction>>,
    next_id: AtomicUsize,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_delete: AtomicBool,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self {
            next_id: AtomicUsize::new(100),
            ..Default::default()
        }
    }

    fn timestamp(id: i64) -> NaiveDateTime {
        let base = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid date");
        base + Duration::minutes(id)
    }

    /// Append a record directly, bypassing create
    pub(crate) fn seed(&self, id: i64, text: &str, amount: f64, kind: TransactionType) {
        self.transactions.lock().unwrap().push(Transaction {
            id: TransactionId(id),
            text: text.to_string(),
            amount,
            kind,
            date: Self::timestamp(id),
        });
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.lock().unwrap().len()
    }

    pub(crate) fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn create_error() -> ApiError {
        ApiError::ServerError(500, "create unavailable".to_string())
    }
}

impl TransactionStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Transaction>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ApiError::RequestError("store unreachable".to_string()));
        }
        Ok(self.transactions.lock().unwrap().clone())
    }

    async fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::create_error());
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
        let created = Transaction {
            id: TransactionId(id),
            text: new_transaction.text.clone(),
            amount: new_transaction.amount,
            kind: new_transaction.kind,
            date: Self::timestamp(id),
        };
        // Newest first, like the HTTP store
        self.transactions.lock().unwrap().insert(0, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: TransactionId) -> Result<(), ApiError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(ApiError::ServerError(500, "delete unavailable".to_string()));
        }

        let mut transactions = self.transactions.lock().unwrap();
        let before = transactions.len();
        transactions.retain(|tx| tx.id != id);
        if transactions.len() == before {
            return Err(ApiError::NotFound("Transaction not found".to_string()));
        }
        Ok(())
    }
}
