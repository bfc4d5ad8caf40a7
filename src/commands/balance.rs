use crate::commands::Session;
use crate::services::{transaction_service, TransactionStore};

pub fn execute<S: TransactionStore>(session: &Session<S>, out: &mut Vec<String>) -> Result<(), String> {
    out.push(transaction_service::create_totals_message(&session.view_model.summary()));
    Ok(())
}
