//! Horizontal layout of schedule bars on a 24-hour chart axis.
//!
//! The axis does not start at midnight: position 0% is the window's
//! start hour (07:00 in the default chart) and 100% is the same hour a
//! day later. Intervals that cross the wraparound point get a full
//! cycle added to their end position, so a span may extend past 100%;
//! clipping is the renderer's job.

use crate::errors::{AppError, AppResult};
use crate::models::clock::ClockTime;
use crate::models::interval::Interval;
use serde::Serialize;
use std::fmt;

pub const HOURS_PER_DAY: u32 = 24;

/// The reference frame of the chart: which hour of day sits at the left
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineWindow {
    start_hour: u32,
}

/// Horizontal placement of one bar, in percent of the axis width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

/// One tick of the chart header. `next_day` marks hours past midnight
/// of the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourLabel {
    pub hour: u32,
    pub next_day: bool,
}

impl fmt::Display for HourLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.next_day {
            write!(f, "{}:00+", self.hour)
        } else {
            write!(f, "{}:00", self.hour)
        }
    }
}

impl Default for TimelineWindow {
    fn default() -> Self {
        // The staffing chart starts the day at 07:00.
        Self { start_hour: 7 }
    }
}

impl TimelineWindow {
    pub fn new(start_hour: u32) -> AppResult<Self> {
        if start_hour >= HOURS_PER_DAY {
            return Err(AppError::InvalidWindowHour(start_hour));
        }
        Ok(Self { start_hour })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Re-express an hour of day as an offset from the chart origin,
    /// in [0, 23].
    pub fn normalize_hour(&self, hour: u32) -> u32 {
        (hour + HOURS_PER_DAY - self.start_hour) % HOURS_PER_DAY
    }

    /// Position of a clock time along the axis, in [0, 100).
    pub fn position_percent(&self, time: ClockTime) -> f64 {
        let hour = self.normalize_hour(time.hour()) as f64;
        let minute = time.minute() as f64;
        (hour + minute / 60.0) / HOURS_PER_DAY as f64 * 100.0
    }

    /// Left edge and width of an interval's bar. When the interval
    /// crosses the window's wraparound point the end gains a full
    /// cycle, so `left + width` may exceed 100.
    pub fn span_percent(&self, interval: &Interval) -> Span {
        let left = self.position_percent(interval.start);
        let mut end = self.position_percent(interval.end);
        if end < left {
            end += 100.0;
        }
        Span {
            left,
            width: end - left,
        }
    }

    /// The 24 tick labels of the chart header, starting at the window
    /// origin.
    pub fn hour_labels(&self) -> Vec<HourLabel> {
        (0..HOURS_PER_DAY)
            .map(|i| HourLabel {
                hour: (self.start_hour + i) % HOURS_PER_DAY,
                next_day: self.start_hour + i >= HOURS_PER_DAY,
            })
            .collect()
    }
}
