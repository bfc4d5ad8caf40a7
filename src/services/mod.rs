pub mod transaction_service;
pub mod transaction_store;
pub mod view_model;

pub use transaction_store::TransactionStore;
pub use view_model::{AddOutcome, TransactionViewModel};
