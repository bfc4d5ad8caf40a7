use crate::api::transactions::TransactionId;
use crate::commands::Session;
use crate::services::{transaction_service, TransactionStore};

pub async fn execute<S: TransactionStore>(
    session: &mut Session<S>,
    args: &[&str],
    out: &mut Vec<String>,
) -> Result<(), String> {
    let id = args
        .first()
        .ok_or("Usage: `delete <id>`".to_string())?
        .parse::<TransactionId>()?;

    session
        .view_model
        .delete_transaction(id)
        .await
        .map_err(|e| format!("Failed to delete transaction {}: {}", id, e))?;

    out.push(format!("🗑️ Deleted transaction #{}", id));
    out.push(transaction_service::create_totals_message(&session.view_model.summary()));
    Ok(())
}
