use chrono::Weekday;
use shiftdesk::models::settings::{LunchSchedule, Settings};
use shiftdesk::store;

#[test]
fn default_week_runs_monday_to_friday() {
    let settings = Settings::default();

    for weekday in [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ] {
        let day = settings.working_hours.for_weekday(weekday);
        assert!(day.enabled, "{weekday} should be enabled");
        assert_eq!(day.start.to_string(), "09:00");
        assert_eq!(day.end.to_string(), "18:00");
        assert!(!day.next_day);
    }

    assert!(!settings.working_hours.saturday.enabled);
    assert!(!settings.working_hours.sunday.enabled);
    assert!(settings.working_hours.holidays.is_empty());
}

#[test]
fn default_policies_match_the_product_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.consultant_break.break_minutes, 30);
    assert_eq!(settings.consultant_break.max_break_count, 1);

    assert!(!settings.lunch_break.enabled);
    assert_eq!(settings.lunch_break.schedule, LunchSchedule::Daily);
    assert_eq!(settings.lunch_break.interval().to_string(), "13:00 ~ 14:00");

    assert!(settings.auto_response);
    assert!(!settings.auto_response_delay);
    assert!(settings.welcome_message);
    assert!(settings.work_hours_connection.is_none());
}

#[test]
fn tenant_state_enables_lunch_and_registers_holidays() {
    let settings = store::settings::current();

    assert!(settings.lunch_break.enabled);
    assert_eq!(settings.working_hours.holidays.len(), 2);
    assert!(!settings.welcome_message_text.is_empty());

    let all_day = &settings.working_hours.holidays[0];
    assert!(all_day.all_day);
    assert!(all_day.hours.is_none());

    let partial = &settings.working_hours.holidays[1];
    assert!(!partial.all_day);
    assert_eq!(partial.hours.as_ref().unwrap().start.to_string(), "09:00");
}

#[test]
fn connection_flag_serializes_as_y_n_or_empty() {
    let mut settings = Settings::default();

    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["work_hours_connection"], "");

    settings.work_hours_connection = Some(true);
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["work_hours_connection"], "Y");

    settings.work_hours_connection = Some(false);
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["work_hours_connection"], "N");
}

#[test]
fn connection_flag_round_trips_and_rejects_garbage() {
    let settings = store::settings::current();
    let json = serde_json::to_string(&settings).unwrap();
    let back: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);

    let broken = json.replace("\"work_hours_connection\":\"\"", "\"work_hours_connection\":\"X\"");
    assert!(serde_json::from_str::<Settings>(&broken).is_err());
}

#[test]
fn lunch_schedule_labels_and_wire_form() {
    assert_eq!(LunchSchedule::Daily.label(), "매일");
    assert_eq!(LunchSchedule::Weekdays.label(), "평일");
    assert_eq!(LunchSchedule::Weekends.label(), "주말");

    assert_eq!(serde_json::to_string(&LunchSchedule::Daily).unwrap(), "\"daily\"");
    let parsed: LunchSchedule = serde_json::from_str("\"weekdays\"").unwrap();
    assert_eq!(parsed, LunchSchedule::Weekdays);
}
