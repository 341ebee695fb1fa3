//! Budget summary formatting

use crate::services::LedgerView;

/// Format limit, spent and remaining, one per line
pub fn format_summary(view: &LedgerView, symbol: &str) -> String {
    let mut output = String::new();

    let limit = if view.monthly_limit.is_zero() {
        format!("{} (not set)", view.monthly_limit.format_with_symbol(symbol))
    } else {
        view.monthly_limit.format_with_symbol(symbol)
    };

    output.push_str(&format!("Monthly limit: {}\n", limit));
    output.push_str(&format!(
        "Total spent:   {}\n",
        view.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining:     {}\n",
        view.remaining.format_with_symbol(symbol)
    ));

    if view.unsaved {
        output.push_str("Warning: changes could not be saved to disk\n");
    }

    output
}
