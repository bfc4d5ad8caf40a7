pub const HELP_TEXT: &str = "\
📖 Expense Tracker Commands
🎯 General
  help                     Show this help message
  quit | exit              Leave the tracker
📋 History
  list | ls                Show transactions and totals
  balance | bal            Show balance, income and expense
  refresh                  Reload transactions from the store
📝 New Transaction
  text <description>       Set the description
  amount <value>           Set the amount (0 or more)
  income | expense         Set the direction (credit/debit)
  form                     Show the pending transaction
  submit                   Add the pending transaction
  add <credit|debit> <amount> <description>
                           Fill the form and add in one step
🗑️ Delete
  delete | rm <id>         Delete a transaction by id";

pub fn execute(out: &mut Vec<String>) -> Result<(), String> {
    out.push(HELP_TEXT.to_string());
    Ok(())
}
