use crate::api::transactions::Transaction;
use crate::models::{TotalsResult, TransactionForm, TransactionItem, TransactionListResult};
use crate::utils::Table;

pub const EMPTY_HISTORY_HINT: &str =
    "Add one with `add <credit|debit> <amount> <description>` or type `help`";

pub const EMPTY_HISTORY_MESSAGE: &str = "No transactions yet. Add one to get started.";

/// Render the transaction history as a table
pub fn get_transaction_list(transactions: &[Transaction]) -> TransactionListResult {
    if transactions.is_empty() {
        return TransactionListResult {
            formatted_message: EMPTY_HISTORY_MESSAGE.to_string(),
            is_empty: true,
        };
    }

    let mut table = Table::new(vec!["ID", "Date", "Description", "Amount"]).align_right(3);
    for tx in transactions {
        let item = TransactionItem::from(tx);
        table.add_row(vec![
            item.id.as_str(),
            item.date.as_str(),
            item.text.as_str(),
            item.amount.as_str(),
        ]);
    }

    TransactionListResult {
        formatted_message: format!(
            "📋 Recent Transactions ({} entries)\n{}",
            transactions.len(),
            table.render()
        ),
        is_empty: false,
    }
}

pub fn create_totals_message(totals: &TotalsResult) -> String {
    format!(
        "💰 Total Balance: {}\n📈 Total Income:  {}\n📉 Total Expense: {}\n🧾 {} entries",
        totals.balance, totals.income, totals.expense, totals.entries
    )
}

pub fn create_form_message(form: &TransactionForm) -> String {
    let show = |value: &str| {
        if value.is_empty() {
            "(empty)".to_string()
        } else {
            value.to_string()
        }
    };

    format!(
        "📝 New Transaction\nDescription: {}\nAmount:      {}\nType:        {}",
        show(&form.text),
        show(&form.amount),
        form.kind
    )
}
