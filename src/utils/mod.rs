pub mod table;

pub use table::Table;

/// Format a money value with two decimals. Values that round to zero print
/// as `0.00`, never `-0.00`.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}
