//! Monthly staffing summary over the calendar grid.

use crate::models::calendar::CalendarDay;
use crate::utils::date::{is_weekend, month_grid};
use chrono::Datelike;

/// One `CalendarDay` per cell of the 6x7 grid. Weekdays of the target
/// month are fully staffed in the mock data; weekends and filler cells
/// carry no schedule.
pub fn month_summary(year: i32, month: u32) -> Vec<CalendarDay> {
    month_grid(year, month)
        .into_iter()
        .map(|date| {
            let in_current_month = date.year() == year && date.month() == month;
            let staffed = in_current_month && !is_weekend(date);
            CalendarDay {
                date,
                in_current_month,
                scheduled: 3,
                actual: if staffed { 3 } else { 0 },
                adherence: if staffed { 100 } else { 0 },
                has_schedule: staffed,
                schedule_label: staffed.then(|| "10:00-18:00 근무".to_string()),
            }
        })
        .collect()
}
