/// ANSI color helper utilities for terminal output.
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Attendance badge: 출근 in green, 미출근 in red.
pub fn presence_badge(present: bool) -> String {
    if present {
        Colour::Green.paint("출근").to_string()
    } else {
        Colour::Red.paint("미출근").to_string()
    }
}

/// Adherence below 80% is flagged red; unstaffed days are grey.
pub fn color_for_adherence(adherence: u32) -> &'static str {
    if adherence == 0 {
        GREY
    } else if adherence < 80 {
        RED
    } else {
        RESET
    }
}

/// Colour of a gantt bar by its schedule kind.
pub fn bar_colour(kind: crate::core::logic::BarKind) -> Colour {
    match kind {
        crate::core::logic::BarKind::Work => Colour::Blue,
        crate::core::logic::BarKind::Lunch => Colour::Yellow,
        crate::core::logic::BarKind::Break => Colour::Green,
    }
}

/// Grey out placeholder cells ("-", unset fields), keep real values as-is.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
