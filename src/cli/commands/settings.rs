use crate::cli::parser::Commands;
use crate::core::calculator::duration::{format_duration, minutes_between};
use crate::errors::AppResult;
use crate::models::settings::{DayHours, Settings};
use crate::store;
use crate::ui::messages;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::wrap_indented;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Settings { json } = cmd {
        let settings = store::settings::current();

        if *json {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            return Ok(());
        }

        render(&settings);
    }

    Ok(())
}

fn on_off(v: bool) -> &'static str {
    if v { "사용" } else { "사용 안 함" }
}

fn hours_cell(day: &DayHours) -> String {
    if !day.enabled {
        return format!("{GREY}-{RESET}");
    }
    if day.all_day {
        return "종일".to_string();
    }
    let mark = if day.next_day { " (익일)" } else { "" };
    format!("{} ~ {}{}", day.start.to_display(), day.end.to_display(), mark)
}

fn duration_cell(day: &DayHours) -> String {
    if !day.enabled || day.all_day {
        return String::new();
    }
    format_duration(minutes_between(day.start, day.end))
}

fn render(settings: &Settings) {
    messages::header("근무 시간");

    let week = [
        ("월요일", &settings.working_hours.monday),
        ("화요일", &settings.working_hours.tuesday),
        ("수요일", &settings.working_hours.wednesday),
        ("목요일", &settings.working_hours.thursday),
        ("금요일", &settings.working_hours.friday),
        ("토요일", &settings.working_hours.saturday),
        ("일요일", &settings.working_hours.sunday),
    ];

    let rows: Vec<Vec<String>> = week
        .iter()
        .map(|(label, day)| {
            vec![
                label.to_string(),
                if day.enabled { "운영" } else { "휴무" }.to_string(),
                hours_cell(day),
                duration_cell(day),
            ]
        })
        .collect();

    let headers = ["요일", "운영", "시간", "운영시간"];
    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| Column::fit(h, rows.iter().map(|r| r[i].as_str())))
        .collect();

    let mut table = Table::new(columns);
    for row in rows {
        table.add_row(row);
    }
    print!("{}", table.render());

    println!();
    messages::header("휴일");
    if settings.working_hours.holidays.is_empty() {
        println!("{GREY}등록된 휴일이 없습니다.{RESET}");
    } else {
        for holiday in &settings.working_hours.holidays {
            let when = if holiday.all_day {
                "종일".to_string()
            } else {
                match &holiday.hours {
                    Some(h) => {
                        let mark = if h.next_day { " (익일)" } else { "" };
                        format!("{} ~ {}{}", h.start, h.end, mark)
                    }
                    None => "-".to_string(),
                }
            };
            println!("- {}  {}  {}", holiday.date, holiday.description, when);
        }
    }

    println!();
    messages::header("상담사 휴식");
    println!("휴식 최대 허용 시간: {}분", settings.consultant_break.break_minutes);
    println!("휴식 최대 허용 횟수: {}회", settings.consultant_break.max_break_count);

    println!();
    messages::header("점심시간");
    println!("사용 여부: {}", on_off(settings.lunch_break.enabled));
    if settings.lunch_break.enabled {
        println!("적용 일정: {}", settings.lunch_break.schedule.label());
        println!(
            "시간: {} ({})",
            settings.lunch_break.interval(),
            format_duration(minutes_between(
                settings.lunch_break.start,
                settings.lunch_break.end
            ))
        );
        println!("자동 안내 메시지: {}", on_off(settings.lunch_break.auto_message));
    }

    println!();
    messages::header("상담 설정");
    println!("자동 응답: {}", on_off(settings.auto_response));
    println!("자동 응답 지연: {}", on_off(settings.auto_response_delay));
    println!(
        "근무시간 연결: {}",
        on_off(settings.use_work_hours_connection)
    );
    println!("근무시간 연결 유형: {}", match settings.work_hours_connection {
        Some(true) => "연결함 (Y)",
        Some(false) => "연결 안 함 (N)",
        None => "미설정",
    });
    println!("상담 자동 진행: {}", on_off(settings.auto_progress));
    println!("환영 메시지: {}", on_off(settings.welcome_message));
    if settings.welcome_message && !settings.welcome_message_text.is_empty() {
        println!("{}", wrap_indented(&settings.welcome_message_text, 48, "  "));
    }
}
