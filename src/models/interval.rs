//! Time-of-day intervals and consultant break sets.

use super::clock::ClockTime;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A span between two clock times. An end earlier than the start in
/// minute-of-day terms means the span continues into the next day;
/// equal start and end is a zero-length span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Interval {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Build an interval from two "HH:MM" strings, naming the failing
    /// side in the error.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        Ok(Self {
            start: ClockTime::parse_field("start", start)?,
            end: ClockTime::parse_field("end", end)?,
        })
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end.minutes_of_day() < self.start.minutes_of_day()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", self.start, self.end)
    }
}

/// A consultant's break schedule: an on/off switch plus the break
/// intervals in display order. Overlapping entries are kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakSet {
    pub enabled: bool,
    pub times: Vec<Interval>,
}

impl BreakSet {
    pub fn new(enabled: bool, times: Vec<Interval>) -> Self {
        Self { enabled, times }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// Number of breaks that count for display: 0 when the set is off.
    pub fn active_count(&self) -> usize {
        if self.enabled { self.times.len() } else { 0 }
    }
}
