pub mod hours;
pub mod models;

pub use hours::{fill_hours_data, offset_minutes_behind_utc, HOURS_PER_DAY};
pub use models::{AnalyticsRecord, HourHistogram};
