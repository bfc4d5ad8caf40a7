use crate::commands::Session;
use crate::services::{transaction_service, TransactionStore};

/// Transaction history followed by the totals
pub fn execute<S: TransactionStore>(session: &Session<S>, out: &mut Vec<String>) -> Result<(), String> {
    let result = transaction_service::get_transaction_list(session.view_model.transactions());
    out.push(result.formatted_message);
    out.push(transaction_service::create_totals_message(&session.view_model.summary()));
    if result.is_empty {
        out.push(transaction_service::EMPTY_HISTORY_HINT.to_string());
    }
    Ok(())
}
