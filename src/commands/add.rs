use crate::api::transactions::TransactionType;
use crate::commands::Session;
use crate::services::{transaction_service, AddOutcome, TransactionStore};
use crate::utils::format_amount;

const USAGE: &str = "Usage: `add <credit|debit> <amount> <description>` (e.g. `add debit 12.50 Groceries`)";

/// `submit`: send the pending form.
///
/// The form is cleared whenever the store accepted the transaction, even if
/// the follow-up reload failed.
pub async fn submit<S: TransactionStore>(
    session: &mut Session<S>,
    out: &mut Vec<String>,
) -> Result<(), String> {
    let form = session.form.clone();

    let outcome = session
        .view_model
        .add_transaction(&form.text, &form.amount, form.kind)
        .await
        .map_err(|e| format!("Failed to add transaction: {}", e))?;

    match outcome {
        AddOutcome::Added { transaction: tx, reload_error } => {
            session.form.reset();
            out.push(format!(
                "✅ Added #{} {} ({} {})",
                tx.id,
                tx.text,
                tx.kind.sign(),
                format_amount(tx.amount)
            ));
            if let Some(e) = reload_error {
                out.push(format!(
                    "⚠️ Added, but reloading transactions failed: {}. Use `refresh` to retry",
                    e
                ));
            }
            out.push(transaction_service::create_totals_message(&session.view_model.summary()));
        }
        AddOutcome::Declined => {
            out.push(
                "⚠️ Nothing submitted: enter a description and an amount of 0 or more".to_string(),
            );
        }
    }

    Ok(())
}

/// `add <credit|debit> <amount> <description...>`
pub async fn execute<S: TransactionStore>(
    session: &mut Session<S>,
    args: &[&str],
    out: &mut Vec<String>,
) -> Result<(), String> {
    if args.len() < 3 {
        return Err(USAGE.to_string());
    }

    let kind = args[0].parse::<TransactionType>()?;

    session.form.kind = kind;
    session.form.amount = args[1].to_string();
    session.form.text = args[2..].join(" ");

    submit(session, out).await
}
