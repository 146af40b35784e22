//! One cell of the monthly staffing calendar.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing filler cells of the 6x7 grid.
    pub in_current_month: bool,
    /// Consultants scheduled to be available.
    pub scheduled: u32,
    /// Consultants actually on duty.
    pub actual: u32,
    /// Schedule adherence, percent. 0 on unstaffed days.
    pub adherence: u32,
    pub has_schedule: bool,
    pub schedule_label: Option<String>,
}

impl CalendarDay {
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}
