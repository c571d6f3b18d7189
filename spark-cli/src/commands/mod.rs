//! CLI command implementations.

pub mod config;
pub mod rooms;
pub mod messages;
pub mod memberships;
pub mod team_memberships;
pub mod teams;
pub mod webhooks;

use chrono::{DateTime, Utc};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;
use serde::Serialize;

use spark_api::SparkClient;
use spark_core::config::AppConfig;
use spark_core::error::SparkResult;

/// Helper to create an API client from config.
pub fn create_api_client(config: &AppConfig) -> SparkResult<SparkClient> {
    SparkClient::new(&config.api)
}

/// Pretty-print any serializable value as JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// A table with the house style and the given header row.
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Print a one-line confirmation.
pub fn print_done(message: &str) {
    println!("  {} {}", style("OK").green().bold(), message);
}

/// Print the "nothing found" line used by every list command.
pub fn print_empty(what: &str) {
    println!("No {what} found.");
}

/// Format an optional timestamp for table output.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Display an optional field, falling back to "-".
pub fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

/// Truncate a string to a maximum number of characters, appending an
/// ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}
