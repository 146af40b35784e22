use shiftdesk::errors::AppError;
use shiftdesk::models::clock::{ClockTime, DisplayTime, Meridiem};

fn t(s: &str) -> ClockTime {
    ClockTime::parse(s).unwrap()
}

#[test]
fn parses_canonical_wire_form() {
    assert_eq!(t("00:00").minutes_of_day(), 0);
    assert_eq!(t("09:05").minutes_of_day(), 545);
    assert_eq!(t("23:59").minutes_of_day(), 1439);
}

#[test]
fn rejects_malformed_strings() {
    for bad in ["9:00", "24:00", "12:60", "ab:cd", "09:0", "0900", " 09:00", "09:00 "] {
        assert!(ClockTime::parse(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn validation_error_names_the_field() {
    match ClockTime::parse_field("start", "25:00") {
        Err(AppError::InvalidTime { field, value }) => {
            assert_eq!(field, "start");
            assert_eq!(value, "25:00");
        }
        other => panic!("expected InvalidTime, got {other:?}"),
    }
}

#[test]
fn display_matches_wire_form_for_every_minute() {
    for minutes in 0..1440 {
        let time = ClockTime::from_minutes_of_day(minutes).unwrap();
        let rendered = time.to_string();
        assert_eq!(ClockTime::parse(&rendered).unwrap(), time);
    }
}

#[test]
fn midnight_and_noon_canonicalize() {
    let midnight = ClockTime::from_display(&DisplayTime::new(12, 0, Meridiem::Am).unwrap());
    assert_eq!(midnight, t("00:00"));

    let noon = ClockTime::from_display(&DisplayTime::new(12, 0, Meridiem::Pm).unwrap());
    assert_eq!(noon, t("12:00"));
}

#[test]
fn twelve_hour_conversion_samples() {
    let morning = t("09:00").to_display();
    assert_eq!(morning.hour(), 9);
    assert_eq!(morning.meridiem(), Meridiem::Am);

    let evening = t("18:30").to_display();
    assert_eq!(evening.hour(), 6);
    assert_eq!(evening.minute(), 30);
    assert_eq!(evening.meridiem(), Meridiem::Pm);

    assert_eq!(t("00:15").to_display().hour(), 12);
    assert_eq!(t("12:45").to_display().meridiem(), Meridiem::Pm);
}

#[test]
fn twelve_hour_round_trip_is_lossless() {
    for minutes in 0..1440 {
        let time = ClockTime::from_minutes_of_day(minutes).unwrap();
        let display = time.to_display();
        assert_eq!(ClockTime::from_display(&display), time, "{time}");
        // And the display form itself survives a second conversion.
        assert_eq!(ClockTime::from_display(&display).to_display(), display);
    }
}

#[test]
fn display_time_rejects_out_of_range_values() {
    assert!(DisplayTime::new(0, 0, Meridiem::Am).is_err());
    assert!(DisplayTime::new(13, 0, Meridiem::Pm).is_err());
    assert!(DisplayTime::new(11, 60, Meridiem::Am).is_err());
}

#[test]
fn display_time_renders_with_meridiem() {
    assert_eq!(t("18:00").to_display().to_string(), "06:00 PM");
    assert_eq!(t("00:00").to_display().to_string(), "12:00 AM");
}

#[test]
fn serde_uses_the_wire_form() {
    let time = t("09:00");
    assert_eq!(serde_json::to_string(&time).unwrap(), "\"09:00\"");

    let parsed: ClockTime = serde_json::from_str("\"22:15\"").unwrap();
    assert_eq!(parsed, t("22:15"));

    assert!(serde_json::from_str::<ClockTime>("\"24:00\"").is_err());
}
