//! Totals models

/// Aggregate figures over the current snapshot, formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsResult {
    pub balance: String,
    pub income: String,
    pub expense: String,
    pub entries: usize,
}
