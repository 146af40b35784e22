use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{sd, temp_config, write_config};

#[test]
fn init_in_test_mode_resolves_the_path_without_writing() {
    let cfg = temp_config("init_test_mode");

    sd().args(["--config", &cfg, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    assert!(!std::path::Path::new(&cfg).exists());
}

#[test]
fn init_writes_the_config_file() {
    let cfg = temp_config("init_writes");

    sd().args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let body = std::fs::read_to_string(&cfg).unwrap();
    assert!(body.contains("window_start_hour"));
    std::fs::remove_file(&cfg).ok();
}

#[test]
fn config_print_shows_the_effective_values() {
    let cfg = temp_config("config_print");

    sd().args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("window_start_hour"))
        .stdout(contains("page_size"));
}

#[test]
fn config_check_flags_bad_values() {
    let cfg = write_config("config_check_bad", "window_start_hour: 7\npage_size: 0\n");

    sd().args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("page_size"));
    std::fs::remove_file(&cfg).ok();
}

#[test]
fn settings_renders_all_sections() {
    let cfg = temp_config("settings_sections");

    sd().args(["--config", &cfg, "settings"])
        .assert()
        .success()
        .stdout(contains("근무 시간"))
        .stdout(contains("월요일"))
        .stdout(contains("점심시간"))
        .stdout(contains("상담사 휴식"))
        .stdout(contains("상담 설정"));
}

#[test]
fn settings_json_is_machine_readable() {
    let cfg = temp_config("settings_json");

    let output = sd()
        .args(["--config", &cfg, "settings", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["lunch_break"]["enabled"], true);
    assert_eq!(value["working_hours"]["monday"]["start"], "09:00");
}

#[test]
fn day_status_lists_the_roster() {
    let cfg = temp_config("day_status");

    sd().args(["--config", &cfg, "day", "2025-08-04"])
        .assert()
        .success()
        .stdout(contains("김상담"))
        .stdout(contains("이해피"))
        .stdout(contains("출근"))
        .stdout(contains("12/15"));
}

#[test]
fn day_search_filters_the_roster() {
    let cfg = temp_config("day_search");

    sd().args(["--config", &cfg, "day", "2025-08-04", "--search", "김상담"])
        .assert()
        .success()
        .stdout(contains("김상담"))
        .stdout(contains("이해피").not());
}

#[test]
fn day_search_with_no_matches_says_so() {
    let cfg = temp_config("day_search_empty");

    sd().args(["--config", &cfg, "day", "2025-08-04", "--search", "없는사람"])
        .assert()
        .success()
        .stdout(contains("검색 결과가 없습니다."));
}

#[test]
fn day_second_page_shows_the_rest() {
    let cfg = temp_config("day_page2");

    sd().args(["--config", &cfg, "day", "2025-08-04", "--page", "2"])
        .assert()
        .success()
        .stdout(contains("신연결"))
        .stdout(contains("김상담").not())
        .stdout(contains("2 / 2 페이지"));
}

#[test]
fn day_gantt_renders_axis_and_legend() {
    let cfg = temp_config("day_gantt");

    sd().args(["--config", &cfg, "day", "2025-08-04", "--gantt"])
        .assert()
        .success()
        .stdout(contains("■ 근무 시간"))
        .stdout(contains("7:00"))
        .stdout(contains("1:00+"));
}

#[test]
fn day_json_carries_the_layout_spans() {
    let cfg = temp_config("day_json");

    let output = sd()
        .args(["--config", &cfg, "day", "2025-08-04", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["window_start_hour"], 7);
    assert_eq!(value["present"], 12);
    assert_eq!(value["rows"][0]["name"], "김상담");
    assert!(value["rows"][0]["bars"][0]["span"]["left"].is_number());
}

#[test]
fn day_rejects_malformed_dates() {
    let cfg = temp_config("day_bad_date");

    sd().args(["--config", &cfg, "day", "2025-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn day_rejects_out_of_range_chart_origin() {
    let cfg = write_config("day_bad_window", "window_start_hour: 99\n");

    sd().args(["--config", &cfg, "day", "2025-08-04"])
        .assert()
        .failure()
        .stderr(contains("Chart start hour out of range"));
    std::fs::remove_file(&cfg).ok();
}

#[test]
fn month_renders_the_calendar_grid() {
    let cfg = temp_config("month_grid");

    sd().args(["--config", &cfg, "month", "2025-08"])
        .assert()
        .success()
        .stdout(contains("2025년 08월"))
        .stdout(contains("SUN"))
        .stdout(contains("준수율(100%)"))
        .stdout(contains("휴무"));
}

#[test]
fn month_json_has_a_full_grid() {
    let cfg = temp_config("month_json");

    let output = sd()
        .args(["--config", &cfg, "month", "2025-08", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["year"], 2025);
    assert_eq!(value["days"].as_array().unwrap().len(), 42);
}

#[test]
fn month_rejects_malformed_input() {
    let cfg = temp_config("month_bad");

    sd().args(["--config", &cfg, "month", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn custom_window_start_moves_the_axis() {
    let cfg = write_config("custom_window", "window_start_hour: 9\n");

    let output = sd()
        .args(["--config", &cfg, "day", "2025-08-04", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["window_start_hour"], 9);
    // 09:00 shifts sit at the origin of a 9-o'clock chart.
    assert_eq!(value["rows"][0]["bars"][0]["span"]["left"], 0.0);
    std::fs::remove_file(&cfg).ok();
}
