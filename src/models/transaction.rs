//! Transaction display models

use crate::api::transactions::Transaction;
use crate::utils::format_amount;

/// One row of the transaction history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionItem {
    pub id: String,
    pub text: String,
    pub amount: String,
    pub date: String,
}

impl From<&Transaction> for TransactionItem {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            text: tx.text.clone(),
            amount: format!("{} {}", tx.kind.sign(), format_amount(tx.amount)),
            date: tx.date.format("%b %-d, %Y").to_string(),
        }
    }
}

/// Rendered transaction history
#[derive(Debug)]
pub struct TransactionListResult {
    pub formatted_message: String,
    pub is_empty: bool,
}
