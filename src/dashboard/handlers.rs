use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::error;

use crate::domain::{fill_hours_data, offset_minutes_behind_utc};
use crate::error::Error;
use crate::state::AppState;

use super::templates::{DashboardErrorTemplate, DashboardTemplate};

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    /// Timezone for bucketing the hourly chart (e.g., "America/New_York")
    pub tz: Option<String>,
    /// Explicit offset in minutes behind UTC, overriding `tz`
    #[serde(rename = "utcOffset")]
    pub utc_offset: Option<i64>,
}

/// Parse a timezone string, falling back to the configured default (and to
/// UTC when the default itself is unparseable)
fn parse_timezone(tz_str: Option<&str>, fallback: &str) -> Tz {
    tz_str
        .and_then(|s| s.parse::<Tz>().ok())
        .unwrap_or_else(|| fallback.parse::<Tz>().unwrap_or(chrono_tz::UTC))
}

/// Resolve the viewer's display label and offset in minutes behind UTC.
/// An explicit `utcOffset` wins over `tz`.
pub fn resolve_offset(query: &ViewerQuery, fallback_tz: &str) -> (String, i64) {
    if let Some(minutes) = query.utc_offset {
        return (format!("UTC offset {} min", minutes), minutes);
    }

    let tz = parse_timezone(query.tz.as_deref(), fallback_tz);
    (
        tz.name().to_string(),
        offset_minutes_behind_utc(tz, Utc::now()),
    )
}

/// GET /
pub async fn dashboard_index(
    State(state): State<AppState>,
    Query(query): Query<ViewerQuery>,
) -> Response {
    let (timezone, offset_minutes) = resolve_offset(&query, &state.settings.default_timezone);

    let record = match state.snapshot().await {
        Ok(record) => record,
        Err(e) => {
            error!("Error loading analytics data: {}", e);
            return error_page(&e);
        }
    };

    let filled = fill_hours_data(&record.count_messages_per_hour, offset_minutes);
    let template = DashboardTemplate::new(&record, &filled, timezone);

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template render error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

fn error_page(err: &Error) -> Response {
    let template = DashboardErrorTemplate::from_error(err);
    match template.render() {
        Ok(html) => (err.status_code(), Html(html)).into_response(),
        Err(e) => {
            error!("Template render error: {}", e);
            (
                err.status_code(),
                format!("Failed to load analytics data: {}", err),
            )
                .into_response()
        }
    }
}
