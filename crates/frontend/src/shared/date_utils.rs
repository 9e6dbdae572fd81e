/// Utilities for date and amount formatting on the policy pages
use chrono::{DateTime, NaiveDate, Utc};

pub const NOT_AVAILABLE: &str = "N/A";

/// Format a calendar date as ISO `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Like `format_date`, with "N/A" for a missing value
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format a timestamp to minute precision
/// Example: 2024-03-15T14:02:26Z -> "2024-03-15 14:02 UTC"
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Format a decimal amount as dollars
/// Example: "1250.4" -> "$1250.40"; unparseable text is shown as-is
pub fn format_money(amount: &str) -> String {
    match amount.trim().parse::<f64>() {
        Ok(value) => format!("${:.2}", value),
        Err(_) if amount.trim().is_empty() => NOT_AVAILABLE.to_string(),
        Err(_) => amount.to_string(),
    }
}
