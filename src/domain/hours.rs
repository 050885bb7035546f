use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use super::models::HourHistogram;

/// Number of buckets in a daily histogram.
pub const HOURS_PER_DAY: usize = 24;

/// Minutes behind UTC for `tz` at instant `at`, in the JavaScript
/// `Date.getTimezoneOffset` convention: positive behind UTC, negative ahead.
pub fn offset_minutes_behind_utc(tz: Tz, at: DateTime<Utc>) -> i64 {
    let seconds_ahead = tz
        .offset_from_utc_datetime(&at.naive_utc())
        .fix()
        .local_minus_utc() as i64;
    -seconds_ahead / 60
}

/// Remap a producer-hour histogram into viewer-local hour buckets.
///
/// Each `(hour, count)` pair at the same index shifts by the whole-hour part
/// of the viewer's UTC offset. Hours outside [0,24) are skipped, leaving their
/// target slot zero. When two source hours land on the same local bucket the
/// later pair overwrites the earlier one.
pub fn fill_hours_data(histogram: &HourHistogram, offset_minutes: i64) -> [i64; HOURS_PER_DAY] {
    let mut filled = [0i64; HOURS_PER_DAY];
    let offset_hours = offset_minutes.div_euclid(60);

    for (&hour, &count) in histogram.hours.iter().zip(&histogram.count_messages) {
        if !(0..HOURS_PER_DAY as i64).contains(&hour) {
            continue;
        }
        let adjusted = (hour - offset_hours).rem_euclid(HOURS_PER_DAY as i64) as usize;
        filled[adjusted] = count;
    }

    filled
}
