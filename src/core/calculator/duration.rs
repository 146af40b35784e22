//! Duration arithmetic over clock times, with midnight wraparound.

use crate::models::clock::ClockTime;
use crate::models::interval::{BreakSet, Interval};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes from `start` to `end`, normalized into [0, 1439]. A negative
/// raw difference means the span runs into the next day and gets a full
/// cycle added (22:00 -> 02:00 is 240 minutes).
///
/// A result of 0 covers both a zero-length span and an exact 24-hour
/// span; the two are indistinguishable here.
pub fn minutes_between(start: ClockTime, end: ClockTime) -> i64 {
    (end.minutes_of_day() - start.minutes_of_day()).rem_euclid(MINUTES_PER_DAY)
}

/// Length of an interval in minutes, wraparound included.
pub fn interval_minutes(interval: &Interval) -> i64 {
    minutes_between(interval.start, interval.end)
}

/// Total break minutes for a consultant. 0 when the set is disabled;
/// otherwise every listed interval counts in order, overlaps included.
pub fn sum_break_minutes(breaks: &BreakSet) -> i64 {
    if !breaks.enabled {
        return 0;
    }
    breaks.times.iter().map(interval_minutes).sum()
}

/// Render a minute count as "{H}시간 {M}분". The minutes part is
/// dropped when 0, the hours part when the value is under an hour;
/// 0 renders as "0분".
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        format!("{mins}분")
    } else if mins == 0 {
        format!("{hours}시간")
    } else {
        format!("{hours}시간 {mins}분")
    }
}
