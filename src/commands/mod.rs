pub mod add;
pub mod balance;
pub mod delete;
pub mod form;
pub mod help;
pub mod list;
pub mod refresh;

use tracing::warn;

use crate::api::transactions::TransactionType;
use crate::models::TransactionForm;
use crate::services::{TransactionStore, TransactionViewModel};

/// State of one terminal session: the view-model plus the pending form
pub struct Session<S> {
    pub view_model: TransactionViewModel<S>,
    pub form: TransactionForm,
}

impl<S: TransactionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            view_model: TransactionViewModel::new(store),
            form: TransactionForm::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one input line. Output lines are appended to `out`.
pub async fn handle_line<S: TransactionStore>(
    session: &mut Session<S>,
    line: &str,
    out: &mut Vec<String>,
) -> Flow {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Flow::Continue;
    }

    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    let result = match command.as_str() {
        "quit" | "exit" => return Flow::Quit,
        "help" | "?" => help::execute(out),
        "list" | "ls" => list::execute(session, out),
        "balance" | "bal" => balance::execute(session, out),
        "refresh" => refresh::execute(session, out).await,
        "text" => form::set_text(session, args),
        "amount" => form::set_amount(session, args),
        "income" | "credit" => form::set_kind(session, TransactionType::Credit),
        "expense" | "debit" => form::set_kind(session, TransactionType::Debit),
        "form" => form::show(session, out),
        "submit" => add::submit(session, out).await,
        "add" => add::execute(session, args, out).await,
        "delete" | "rm" => delete::execute(session, args, out).await,
        _ => Err(format!("Unknown command `{}`. Type `help` for a list of commands", command)),
    };

    if let Err(e) = result {
        warn!("Command {} failed: {}", command, e);
        out.push(format!("❌ {}", e));
    }

    Flow::Continue
}
