//! Per-date bar chart for plain terminal output

use crate::services::DateTotal;

/// Width of the longest bar
const BAR_WIDTH: usize = 30;

/// A bar like `██████░░░░` filled in proportion to `value / max`
pub fn ascii_bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width - filled;

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// One row per date, in first-seen order
pub fn format_date_chart(totals: &[DateTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "Nothing to chart yet.\n".to_string();
    }

    let max = totals
        .iter()
        .map(|t| t.amount.cents().max(0) as u64)
        .max()
        .unwrap_or(0);
    let label_width = totals.iter().map(|t| t.date.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for total in totals {
        output.push_str(&format!(
            "{:<width$}  {}  {}\n",
            total.date,
            ascii_bar(total.amount.cents().max(0) as u64, max, BAR_WIDTH),
            total.amount.format_with_symbol(symbol),
            width = label_width
        ));
    }
    output
}
