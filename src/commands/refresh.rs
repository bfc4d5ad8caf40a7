use crate::commands::Session;
use crate::services::TransactionStore;

pub async fn execute<S: TransactionStore>(
    session: &mut Session<S>,
    out: &mut Vec<String>,
) -> Result<(), String> {
    session
        .view_model
        .refresh()
        .await
        .map_err(|e| format!("Failed to load transactions: {}", e))?;

    out.push(format!(
        "🔄 Loaded {} transactions",
        session.view_model.transactions().len()
    ));
    Ok(())
}
