use askama::Template;

use crate::domain::{AnalyticsRecord, HOURS_PER_DAY};
use crate::error::Error;

#[derive(Template)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub count_users: String,
    pub count_users_today: String,
    pub count_messages: String,
    pub count_messages_today: String,
    /// JSON-encoded chart arrays, injected verbatim into the page script
    pub chart_labels: String,
    pub chart_counts: String,
    pub timezone: String,
    pub generated_at: Option<String>,
}

impl DashboardTemplate {
    pub fn new(
        record: &AnalyticsRecord,
        filled: &[i64; HOURS_PER_DAY],
        timezone: String,
    ) -> Self {
        let labels: Vec<usize> = (0..HOURS_PER_DAY).collect();

        Self {
            count_users: format_count(record.count_users),
            count_users_today: format_count(record.count_users_today),
            count_messages: format_count(record.count_messages),
            count_messages_today: format_count(record.count_messages_today),
            chart_labels: to_json_array(&labels),
            chart_counts: to_json_array(filled.as_slice()),
            timezone,
            generated_at: record
                .timestamp
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

/// Dashboard container with its text replaced by the failure description.
#[derive(Template)]
#[template(path = "dashboard/error.html")]
pub struct DashboardErrorTemplate {
    pub message: String,
}

impl DashboardErrorTemplate {
    pub fn from_error(err: &Error) -> Self {
        Self {
            message: format!("Failed to load analytics data: {}", err),
        }
    }
}

/// Format a count with thousands separators (e.g. 12847 → "12,847").
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}

fn to_json_array<T: serde::Serialize>(values: &[T]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}
