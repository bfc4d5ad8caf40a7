//! Display and input models for the tracker
//!
//! These are the shapes the terminal front end renders or edits; the wire
//! records themselves live in `api::transactions`.

pub mod balance;
pub mod form;
pub mod transaction;

pub use balance::TotalsResult;
pub use form::TransactionForm;
pub use transaction::{TransactionItem, TransactionListResult};
