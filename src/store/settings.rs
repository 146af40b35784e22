//! Current settings state of the mock tenant.

use crate::models::clock::ClockTime;
use crate::models::settings::{Holiday, HolidayHours, Settings};
use chrono::NaiveDate;

/// The tenant's settings as configured today. Starts from the product
/// defaults with the lunch slot switched on and a couple of registered
/// holidays.
pub fn current() -> Settings {
    let mut settings = Settings::default();

    settings.welcome_message_text =
        "안녕하세요, 해피톡 고객센터입니다. 무엇을 도와드릴까요? 상담 가능 시간은 평일 오전 9시부터 오후 6시까지이며, 이외 시간에는 순차적으로 답변드립니다."
            .to_string();

    settings.lunch_break.enabled = true;

    settings.working_hours.holidays = vec![
        Holiday {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            description: "신정".to_string(),
            all_day: true,
            hours: None,
        },
        Holiday {
            date: NaiveDate::from_ymd_opt(2025, 12, 24).unwrap(),
            description: "크리스마스 이브 단축 운영".to_string(),
            all_day: false,
            hours: Some(HolidayHours {
                start: ClockTime::new(9, 0).unwrap(),
                end: ClockTime::new(13, 0).unwrap(),
                next_day: false,
            }),
        },
    ];

    settings
}
