use crate::core::calculator::duration::{format_duration, interval_minutes, sum_break_minutes};
use crate::core::calculator::layout::{Span, TimelineWindow};
use crate::models::consultant::Consultant;
use crate::models::interval::Interval;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarKind {
    Work,
    Lunch,
    Break,
}

/// One positioned bar of the gantt chart.
#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub kind: BarKind,
    pub label: String,
    pub span: Span,
}

/// Everything the staffing views need for one consultant on one day.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultantRow {
    pub name: String,
    pub email: String,
    pub department: String,
    pub title: String,
    pub present: bool,
    pub work_hours: Interval,
    pub worked_label: String,
    pub lunch_label: Option<String>,
    pub break_count: usize,
    pub break_minutes: i64,
    pub break_label: Option<String>,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayOverview {
    pub present: usize,
    pub total: usize,
    pub rows: Vec<ConsultantRow>,
}

/// Slice of a list shown on one page. `start..end` indexes the source
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

pub struct Core;

impl Core {
    /// Assemble the per-day staffing overview for an already-filtered
    /// roster. Bars are only produced for consultants on duty.
    pub fn day_overview(roster: &[&Consultant], window: &TimelineWindow) -> DayOverview {
        let rows = roster.iter().map(|c| Self::build_row(c, window)).collect();
        DayOverview {
            present: roster.iter().filter(|c| c.present).count(),
            total: roster.len(),
            rows,
        }
    }

    fn build_row(consultant: &Consultant, window: &TimelineWindow) -> ConsultantRow {
        let worked = interval_minutes(&consultant.work_hours);
        let break_minutes = sum_break_minutes(&consultant.breaks);

        let mut bars = Vec::new();
        if consultant.present {
            bars.push(Bar {
                kind: BarKind::Work,
                label: format!(
                    "근무시간: {} ({})",
                    consultant.work_hours,
                    format_duration(worked)
                ),
                span: window.span_percent(&consultant.work_hours),
            });
            if let Some(lunch) = &consultant.lunch {
                bars.push(Bar {
                    kind: BarKind::Lunch,
                    label: format!("식사: {} - {}", lunch.start, lunch.end),
                    span: window.span_percent(lunch),
                });
            }
            if consultant.breaks.enabled {
                for b in &consultant.breaks.times {
                    bars.push(Bar {
                        kind: BarKind::Break,
                        label: format!("휴식: {} - {}", b.start, b.end),
                        span: window.span_percent(b),
                    });
                }
            }
        }

        ConsultantRow {
            name: consultant.name.clone(),
            email: consultant.email.clone(),
            department: consultant.department.clone(),
            title: consultant.title.clone(),
            present: consultant.present,
            work_hours: consultant.work_hours,
            worked_label: format_duration(worked),
            lunch_label: consultant.lunch.map(|l| l.to_string()),
            break_count: consultant.breaks.active_count(),
            break_minutes,
            break_label: (break_minutes > 0).then(|| format_duration(break_minutes)),
            bars,
        }
    }

    /// Case-insensitive roster search over name, email, department and
    /// title. An empty query keeps everyone.
    pub fn filter_roster<'a>(roster: &'a [Consultant], query: &str) -> Vec<&'a Consultant> {
        roster.iter().filter(|c| c.matches(query)).collect()
    }

    /// Clamp a 1-based page number against the list size and return the
    /// visible index range.
    pub fn paginate(total: usize, page: usize, per_page: usize) -> PageInfo {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);
        let start = (page - 1) * per_page;
        let end = (start + per_page).min(total);
        PageInfo {
            page,
            total_pages,
            start,
            end,
            total,
        }
    }
}
