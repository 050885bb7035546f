use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One published analytics snapshot. The producer writes a JSON array of
/// these; only the first element is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    /// Producer-local generation time, stamped without an offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
    pub count_users: i64,
    pub count_users_today: i64,
    pub count_messages: i64,
    pub count_messages_today: i64,
    pub count_messages_per_hour: HourHistogram,
}

/// Parallel-array hourly histogram as produced upstream. `hours` values are
/// expected in [0,24); anything else is skipped during the remap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourHistogram {
    pub hours: Vec<i64>,
    pub count_messages: Vec<i64>,
}
