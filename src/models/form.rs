//! Pending input for a new transaction

use crate::api::transactions::TransactionType;

/// Fields of the "new transaction" form. Direction defaults to debit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    pub text: String,
    pub amount: String,
    pub kind: TransactionType,
}

impl TransactionForm {
    /// Clear the fields after a successful submission
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
