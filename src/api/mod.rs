use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::error;

use crate::dashboard::{resolve_offset, ViewerQuery};
use crate::domain::fill_hours_data;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

/// Transformed snapshot: the raw counters plus the histogram remapped into
/// the viewer's timezone.
#[derive(Debug, Serialize)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<NaiveDateTime>,
    pub count_users: i64,
    pub count_users_today: i64,
    pub count_messages: i64,
    pub count_messages_today: i64,
    pub timezone: String,
    pub utc_offset_minutes: i64,
    pub messages_per_hour: Vec<i64>,
}

/// GET /api/summary
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<ViewerQuery>,
) -> Response {
    let (timezone, offset_minutes) = resolve_offset(&query, &state.settings.default_timezone);

    match state.snapshot().await {
        Ok(record) => {
            let filled = fill_hours_data(&record.count_messages_per_hour, offset_minutes);
            let summary = Summary {
                generated_at: record.timestamp,
                count_users: record.count_users,
                count_users_today: record.count_users_today,
                count_messages: record.count_messages,
                count_messages_today: record.count_messages_today,
                timezone,
                utc_offset_minutes: offset_minutes,
                messages_per_hour: filled.to_vec(),
            };
            Json(ApiResponse::success(summary)).into_response()
        }
        Err(e) => {
            error!("Error loading analytics data: {}", e);
            (
                e.status_code(),
                Json(ApiResponse::<()>::error(&e.to_string())),
            )
                .into_response()
        }
    }
}
