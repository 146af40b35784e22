//! Manager-facing settings aggregate: weekday working hours, holiday
//! exceptions, break and lunch policies, and the consultation-acceptance
//! flags. All of it is in-memory state; nothing here touches a backend.

use super::clock::ClockTime;
use super::interval::Interval;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Operating hours for a single weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHours {
    pub enabled: bool,
    pub all_day: bool,
    pub start: ClockTime,
    pub end: ClockTime,
    /// The end time lands on the following day.
    pub next_day: bool,
}

impl DayHours {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

impl Default for DayHours {
    fn default() -> Self {
        Self {
            enabled: true,
            all_day: false,
            start: ClockTime::new(9, 0).unwrap(),
            end: ClockTime::new(18, 0).unwrap(),
            next_day: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayHours {
    pub start: ClockTime,
    pub end: ClockTime,
    pub next_day: bool,
}

/// A dated exception to the weekly schedule. `hours` only applies when
/// the holiday is not all-day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub description: String,
    pub all_day: bool,
    pub hours: Option<HolidayHours>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekHours {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
    pub holidays: Vec<Holiday>,
}

impl WeekHours {
    pub fn for_weekday(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}

impl Default for WeekHours {
    fn default() -> Self {
        let weekend = DayHours {
            enabled: false,
            ..DayHours::default()
        };
        Self {
            monday: DayHours::default(),
            tuesday: DayHours::default(),
            wednesday: DayHours::default(),
            thursday: DayHours::default(),
            friday: DayHours::default(),
            saturday: weekend.clone(),
            sunday: weekend,
            holidays: Vec::new(),
        }
    }
}

/// Per-consultant break allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPolicy {
    /// Maximum length of a single break, in minutes.
    pub break_minutes: u32,
    /// Maximum number of breaks per day.
    pub max_break_count: u32,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            break_minutes: 30,
            max_break_count: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LunchSchedule {
    Daily,
    Weekdays,
    Weekends,
}

impl LunchSchedule {
    pub fn label(&self) -> &'static str {
        match self {
            LunchSchedule::Daily => "매일",
            LunchSchedule::Weekdays => "평일",
            LunchSchedule::Weekends => "주말",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LunchPolicy {
    pub enabled: bool,
    pub schedule: LunchSchedule,
    pub start: ClockTime,
    pub end: ClockTime,
    /// Send an automatic away message during the lunch slot.
    pub auto_message: bool,
}

impl LunchPolicy {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

impl Default for LunchPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            schedule: LunchSchedule::Daily,
            start: ClockTime::new(13, 0).unwrap(),
            end: ClockTime::new(14, 0).unwrap(),
            auto_message: false,
        }
    }
}

/// Wire form of the work-hours connection tri-state: 'Y', 'N' or ''.
mod yn {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<bool>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(match v {
            Some(true) => "Y",
            Some(false) => "N",
            None => "",
        })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        match String::deserialize(d)?.as_str() {
            "Y" => Ok(Some(true)),
            "N" => Ok(Some(false)),
            "" => Ok(None),
            other => Err(serde::de::Error::custom(format!(
                "expected 'Y', 'N' or empty, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub working_hours: WeekHours,
    pub auto_response: bool,
    pub auto_response_delay: bool,
    pub welcome_message: bool,
    pub welcome_message_text: String,
    pub use_work_hours_connection: bool,
    #[serde(with = "yn")]
    pub work_hours_connection: Option<bool>,
    pub consultant_break: BreakPolicy,
    pub lunch_break: LunchPolicy,
    pub auto_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            working_hours: WeekHours::default(),
            auto_response: true,
            auto_response_delay: false,
            welcome_message: true,
            welcome_message_text: String::new(),
            use_work_hours_connection: false,
            work_hours_connection: None,
            consultant_break: BreakPolicy::default(),
            lunch_break: LunchPolicy::default(),
            auto_progress: false,
        }
    }
}
