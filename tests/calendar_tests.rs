use chrono::{Datelike, NaiveDate, Weekday};
use shiftdesk::store::schedule::month_summary;
use shiftdesk::utils::date::{GRID_CELLS, all_days_of_month, month_grid, month_label, parse_month};

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn grid_is_six_weeks_starting_on_sunday() {
    let grid = month_grid(2025, 8);
    assert_eq!(grid.len(), GRID_CELLS);
    assert_eq!(grid[0].weekday(), Weekday::Sun);
    assert_eq!(grid[41], grid[0] + chrono::Duration::days(41));
}

#[test]
fn grid_pads_with_neighbouring_months() {
    // August 2025 starts on a Friday, so the grid opens on July 27.
    let grid = month_grid(2025, 8);
    assert_eq!(grid[0], d(2025, 7, 27));
    assert_eq!(grid[5], d(2025, 8, 1));
    assert_eq!(grid[41], d(2025, 9, 6));
}

#[test]
fn grid_contains_every_day_of_the_month() {
    let grid = month_grid(2025, 8);
    for day in all_days_of_month(2025, 8) {
        assert!(grid.contains(&day), "{day} missing");
    }
}

#[test]
fn month_starting_on_sunday_has_no_leading_filler() {
    // June 2025 starts on a Sunday.
    let grid = month_grid(2025, 6);
    assert_eq!(grid[0], d(2025, 6, 1));
}

#[test]
fn february_grid_is_still_42_cells() {
    assert_eq!(month_grid(2024, 2).len(), GRID_CELLS);
    assert_eq!(all_days_of_month(2024, 2).len(), 29);
    assert_eq!(all_days_of_month(2025, 2).len(), 28);
}

#[test]
fn weekdays_are_staffed_in_the_mock_summary() {
    let days = month_summary(2025, 8);
    let monday = days.iter().find(|c| c.date == d(2025, 8, 4)).unwrap();
    assert!(monday.in_current_month);
    assert_eq!(monday.scheduled, 3);
    assert_eq!(monday.actual, 3);
    assert_eq!(monday.adherence, 100);
    assert!(monday.has_schedule);
    assert_eq!(monday.schedule_label.as_deref(), Some("10:00-18:00 근무"));
}

#[test]
fn weekends_are_unstaffed_in_the_mock_summary() {
    let days = month_summary(2025, 8);
    let sunday = days.iter().find(|c| c.date == d(2025, 8, 3)).unwrap();
    assert!(sunday.in_current_month);
    assert_eq!(sunday.actual, 0);
    assert_eq!(sunday.adherence, 0);
    assert!(!sunday.has_schedule);
    assert!(sunday.schedule_label.is_none());
}

#[test]
fn filler_cells_carry_no_schedule() {
    let days = month_summary(2025, 8);
    let filler = days.iter().find(|c| c.date == d(2025, 7, 28)).unwrap();
    assert!(!filler.in_current_month);
    assert_eq!(filler.actual, 0);
    assert!(!filler.has_schedule);
}

#[test]
fn month_parsing_and_label() {
    assert_eq!(parse_month("2025-08").unwrap(), (2025, 8));
    assert!(parse_month("2025-13").is_err());
    assert!(parse_month("08-2025").is_err());
    assert_eq!(month_label(2025, 8), "2025년 08월");
}
