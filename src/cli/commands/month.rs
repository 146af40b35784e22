use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::calendar::CalendarDay;
use crate::store;
use crate::ui::messages;
use crate::utils::colors::{BLUE, GREY, RED, RESET, color_for_adherence};
use crate::utils::date::{month_label, parse_month, today};
use crate::utils::formatting::{bold, pad_display};
use chrono::Datelike;
use serde::Serialize;

const CELL_WIDTH: usize = 15;
const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

#[derive(Serialize)]
struct MonthReport {
    year: i32,
    month: u32,
    days: Vec<CalendarDay>,
}

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Month { month, json } = cmd {
        let (year, m) = match month {
            Some(s) => parse_month(s)?,
            None => {
                let t = today();
                (t.year(), t.month())
            }
        };

        let days = store::schedule::month_summary(year, m);

        if *json {
            let report = MonthReport {
                year,
                month: m,
                days,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        messages::header(month_label(year, m));
        render(&days);
    }

    Ok(())
}

fn render(days: &[CalendarDay]) {
    let header: Vec<String> = DAY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let colour = match i {
                0 => RED,
                6 => BLUE,
                _ => RESET,
            };
            format!("{colour}{name}{RESET}")
        })
        .collect();
    println!("{}", join_cells(&header));
    println!("{}", "─".repeat((CELL_WIDTH + 2) * 7));

    for week in days.chunks(7) {
        let lines = [
            week.iter().map(cell_day).collect::<Vec<_>>(),
            week.iter().map(cell_scheduled).collect::<Vec<_>>(),
            week.iter().map(cell_actual).collect::<Vec<_>>(),
            week.iter().map(cell_adherence).collect::<Vec<_>>(),
            week.iter().map(cell_schedule_label).collect::<Vec<_>>(),
        ];
        for line in &lines {
            println!("{}", join_cells(line));
        }
        println!();
    }
}

fn join_cells(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| pad_display(c, CELL_WIDTH))
        .collect::<Vec<_>>()
        .join("  ")
}

fn cell_day(day: &CalendarDay) -> String {
    if day.in_current_month {
        bold(&day.day_of_month().to_string())
    } else {
        format!("{GREY}{}{RESET}", day.day_of_month())
    }
}

fn cell_scheduled(day: &CalendarDay) -> String {
    if day.in_current_month {
        format!("상담가능: {}", day.scheduled)
    } else {
        String::new()
    }
}

fn cell_actual(day: &CalendarDay) -> String {
    if day.in_current_month {
        format!("상담원: {}", day.actual)
    } else {
        String::new()
    }
}

fn cell_adherence(day: &CalendarDay) -> String {
    if !day.in_current_month {
        return String::new();
    }
    if day.adherence > 0 {
        let colour = color_for_adherence(day.adherence);
        format!("{colour}준수율({}%){RESET}", day.adherence)
    } else {
        format!("{RED}휴무{RESET}")
    }
}

fn cell_schedule_label(day: &CalendarDay) -> String {
    match (&day.schedule_label, day.in_current_month) {
        (Some(label), true) => format!("{GREY}{label}{RESET}"),
        _ => String::new(),
    }
}
