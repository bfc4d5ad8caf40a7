use crate::api::transactions::TransactionType;
use crate::commands::Session;
use crate::services::{transaction_service, TransactionStore};

/// `text <description...>`
pub fn set_text<S: TransactionStore>(session: &mut Session<S>, args: &[&str]) -> Result<(), String> {
    session.form.text = args.join(" ");
    Ok(())
}

/// `amount <value>`. The value is kept as typed; it is validated on submit.
pub fn set_amount<S: TransactionStore>(session: &mut Session<S>, args: &[&str]) -> Result<(), String> {
    session.form.amount = args.first().copied().unwrap_or_default().to_string();
    Ok(())
}

pub fn set_kind<S: TransactionStore>(session: &mut Session<S>, kind: TransactionType) -> Result<(), String> {
    session.form.kind = kind;
    Ok(())
}

/// `form`
pub fn show<S: TransactionStore>(session: &Session<S>, out: &mut Vec<String>) -> Result<(), String> {
    out.push(transaction_service::create_form_message(&session.form));
    Ok(())
}
