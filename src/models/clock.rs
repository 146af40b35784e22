//! Wall-clock time of day. Canonical wire form is a zero-padded 24-hour
//! "HH:MM" string; a 12-hour display form exists for the settings screens.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn time_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").unwrap())
}

/// A validated time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        if hour > 23 {
            return Err(AppError::invalid_time("hour", hour.to_string()));
        }
        if minute > 59 {
            return Err(AppError::invalid_time("minute", minute.to_string()));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Parse the canonical "HH:MM" wire form. Rejects non-padded and
    /// out-of-range values.
    pub fn parse(s: &str) -> AppResult<Self> {
        Self::parse_field("time", s)
    }

    /// Same as [`ClockTime::parse`] but names the field the value came
    /// from in the error, for form-level reporting.
    pub fn parse_field(field: &'static str, s: &str) -> AppResult<Self> {
        if !time_pattern().is_match(s) {
            return Err(AppError::invalid_time(field, s));
        }
        // The pattern guarantees two zero-padded in-range components.
        let hour = s[0..2].parse::<u8>().unwrap();
        let minute = s[3..5].parse::<u8>().unwrap();
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Minute offset since 00:00, in [0, 1439].
    pub fn minutes_of_day(&self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }

    pub fn from_minutes_of_day(minutes: i64) -> AppResult<Self> {
        if !(0..1440).contains(&minutes) {
            return Err(AppError::invalid_time("minutes", minutes.to_string()));
        }
        Ok(Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        })
    }

    pub fn to_display(&self) -> DisplayTime {
        let (hour, meridiem) = match self.hour {
            0 => (12, Meridiem::Am),
            h @ 1..=11 => (h, Meridiem::Am),
            12 => (12, Meridiem::Pm),
            h => (h - 12, Meridiem::Pm),
        };
        DisplayTime {
            hour,
            minute: self.minute,
            meridiem,
        }
    }

    /// 12-hour form back to 24-hour. 12:xx AM maps to 00:xx, 12:xx PM
    /// stays 12:xx.
    pub fn from_display(d: &DisplayTime) -> Self {
        let hour = match (d.meridiem, d.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Pm, h) if h < 12 => h + 12,
            (_, h) => h,
        };
        Self {
            hour,
            minute: d.minute,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "AM" => Some(Meridiem::Am),
            "PM" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

/// 12-hour display form of a [`ClockTime`]: hour 1-12 plus AM/PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayTime {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl DisplayTime {
    pub fn new(hour: u32, minute: u32, meridiem: Meridiem) -> AppResult<Self> {
        if !(1..=12).contains(&hour) {
            return Err(AppError::invalid_clock("hour", hour.to_string()));
        }
        if minute > 59 {
            return Err(AppError::invalid_clock("minute", minute.to_string()));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            meridiem,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} {}",
            self.hour,
            self.minute,
            self.meridiem.as_str()
        )
    }
}
