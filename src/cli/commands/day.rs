use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::layout::TimelineWindow;
use crate::core::logic::{Bar, BarKind, ConsultantRow, Core, PageInfo};
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages;
use crate::utils::colors::{GREY, RESET, bar_colour, colorize_optional, presence_badge};
use crate::utils::date::{date_label, parse_date, today};
use crate::utils::formatting::pad_display;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
struct DayReport<'a> {
    date: NaiveDate,
    window_start_hour: u32,
    present: usize,
    total: usize,
    page: PageInfo,
    rows: &'a [ConsultantRow],
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        date,
        gantt,
        search,
        page,
        json,
    } = cmd
    {
        let date = match date {
            Some(s) => parse_date(s)?,
            None => today(),
        };
        let window = TimelineWindow::new(cfg.window_start_hour)?;

        let roster = store::consultants::roster();
        let query = search.as_deref().unwrap_or("");
        let filtered = Core::filter_roster(&roster, query);
        let overview = Core::day_overview(&filtered, &window);
        let page_info = Core::paginate(overview.rows.len(), *page, cfg.page_size);
        let visible = &overview.rows[page_info.start..page_info.end];

        if *json {
            let report = DayReport {
                date,
                window_start_hour: window.start_hour(),
                present: overview.present,
                total: overview.total,
                page: page_info,
                rows: visible,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        messages::header(date_label(date));
        println!("상담사 {}/{} 출근\n", overview.present, overview.total);

        if visible.is_empty() {
            if query.trim().is_empty() {
                println!("등록된 상담사가 없습니다.");
            } else {
                println!("검색 결과가 없습니다.");
            }
            return Ok(());
        }

        if *gantt {
            render_gantt(visible, &window, cfg.grid_width);
        } else {
            render_status(visible);
        }

        println!(
            "\n{} / {} 페이지 ({}–{} / {}명)",
            page_info.page,
            page_info.total_pages,
            page_info.start + 1,
            page_info.end,
            page_info.total
        );
    }

    Ok(())
}

fn render_status(rows: &[ConsultantRow]) {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.email.clone(),
                format!("{}/{}", row.department, row.title),
                presence_badge(row.present),
                row.lunch_label
                    .clone()
                    .unwrap_or_else(|| format!("{GREY}식사시간 미설정{RESET}")),
                colorize_optional(&match row.break_count {
                    0 => "-".to_string(),
                    n => n.to_string(),
                }),
                colorize_optional(row.break_label.as_deref().unwrap_or("-")),
            ]
        })
        .collect();

    let headers = [
        "상담사",
        "이메일",
        "부서/직책",
        "출근여부",
        "식사시간",
        "휴식 횟수",
        "휴식 시간 합계",
    ];
    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| Column::fit(h, cells.iter().map(|r| r[i].as_str())))
        .collect();

    let mut table = Table::new(columns);
    for row in cells {
        table.add_row(row);
    }
    print!("{}", table.render());
}

fn render_gantt(rows: &[ConsultantRow], window: &TimelineWindow, grid_width: usize) {
    // Column count snaps to a whole number of columns per hour.
    let per_hour = (grid_width / 24).max(1);
    let width = per_hour * 24;

    println!(
        "{}  {}  {}",
        bar_colour(BarKind::Work).paint("■ 근무 시간"),
        bar_colour(BarKind::Lunch).paint("■ 식사 시간"),
        bar_colour(BarKind::Break).paint("■ 휴식 시간"),
    );
    println!();
    println!("{}{}", " ".repeat(6), axis_line(window, per_hour));

    for row in rows {
        println!("{} ({})", row.name, row.title);

        if !row.present {
            println!("      {GREY}미출근{RESET}");
            continue;
        }

        for kind in [BarKind::Work, BarKind::Lunch, BarKind::Break] {
            let bars: Vec<&Bar> = row.bars.iter().filter(|b| b.kind == kind).collect();
            if bars.is_empty() {
                continue;
            }
            let label = match kind {
                BarKind::Work => "근무",
                BarKind::Lunch => "식사",
                BarKind::Break => "휴식",
            };
            println!(
                "{}  {}",
                pad_display(label, 4),
                bar_colour(kind).paint(track_line(&bars, width))
            );
        }
    }
}

/// Header line of the chart: one tick every three hours, "+" marks the
/// next day.
fn axis_line(window: &TimelineWindow, per_hour: usize) -> String {
    let mut axis = String::new();
    for label in window.hour_labels().iter().step_by(3) {
        axis.push_str(&pad_display(&label.to_string(), per_hour * 3));
    }
    axis
}

/// Fill one track of the chart with the given bars. Spans extending
/// past the right edge are clipped here, not in the layout.
fn track_line(bars: &[&Bar], width: usize) -> String {
    let mut track = vec![' '; width];
    for bar in bars {
        let start = (bar.span.left / 100.0 * width as f64).round() as usize;
        let len = ((bar.span.width / 100.0 * width as f64).round() as usize).max(1);
        if start >= width {
            continue;
        }
        let end = (start + len).min(width);
        for cell in &mut track[start..end] {
            *cell = '█';
        }
    }
    track.into_iter().collect()
}
