use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Cells in the fixed month grid: six rows of seven days.
pub const GRID_CELLS: usize = 42;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// "YYYY-MM" -> (year, month).
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
    Ok((first.year(), first.month()))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

/// The 42 dates of the calendar grid for a month: Sunday-aligned, padded
/// with trailing days of the previous month and leading days of the next.
pub fn month_grid(year: i32, month: u32) -> Vec<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let lead = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(lead);

    start.iter_days().take(GRID_CELLS).collect()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// "2025년 08월"
pub fn month_label(year: i32, month: u32) -> String {
    format!("{year}년 {month:02}월")
}

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월요일",
        Weekday::Tue => "화요일",
        Weekday::Wed => "수요일",
        Weekday::Thu => "목요일",
        Weekday::Fri => "금요일",
        Weekday::Sat => "토요일",
        Weekday::Sun => "일요일",
    }
}

/// "2025년 8월 8일 금요일"
pub fn date_label(date: NaiveDate) -> String {
    format!(
        "{}년 {}월 {}일 {}",
        date.year(),
        date.month(),
        date.day(),
        weekday_label(date.weekday())
    )
}
