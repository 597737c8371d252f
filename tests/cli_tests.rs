mod common;

use common::{load_sample, rtt, sample_sessions, setup_schedule, write_input};
use predicates::str::contains;
use serde_json::{Value, json};
use std::fs;

#[test]
fn test_init_in_test_mode() {
    rtt()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
}

#[test]
fn test_config_print() {
    rtt()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_view: table"))
        .stdout(contains("use_colors: true"));
}

#[test]
fn test_load_bare_array_then_stats() {
    let schedule = setup_schedule("load_bare");
    let input = write_input("load_bare_input", &sample_sessions().to_string());

    rtt()
        .args(["--schedule", &schedule, "load", "--file", &input])
        .assert()
        .success()
        .stdout(contains("4 sessions"));

    rtt()
        .args(["--schedule", &schedule, "stats"])
        .assert()
        .success()
        .stdout(contains("Total classes    : 4"))
        .stdout(contains("Instructors used : 4"))
        .stdout(contains("Year 2: 2 Total | 1 Lectures | 1 Labs"))
        .stdout(contains("Sections: Y1S7, Y2S1, Y2S2, Y2S3, Y4S4"));
}

#[test]
fn test_load_success_envelope() {
    let schedule = setup_schedule("load_envelope");
    let doc = json!({
        "success": true,
        "message": "Timetable generated",
        "timetable": sample_sessions()
    });
    let input = write_input("load_envelope_input", &doc.to_string());

    rtt()
        .args(["--schedule", &schedule, "load", "--file", &input])
        .assert()
        .success();

    let stored: Value = serde_json::from_str(&fs::read_to_string(&schedule).expect("store"))
        .expect("store json");
    assert_eq!(stored.as_array().map(|a| a.len()), Some(4));
}

#[test]
fn test_load_from_stdin() {
    let schedule = setup_schedule("load_stdin");

    rtt()
        .args(["--schedule", &schedule, "load", "--file", "-"])
        .write_stdin(sample_sessions().to_string())
        .assert()
        .success();

    rtt()
        .args(["--schedule", &schedule, "--years", "4", "stats"])
        .assert()
        .success()
        .stdout(contains("Total classes    : 1"));
}

#[test]
fn test_failed_upstream_keeps_previous_schedule() {
    let schedule = setup_schedule("load_failure");
    load_sample(&schedule, "load_failure_input");

    let failure = write_input(
        "load_failure_envelope",
        r#"{"success": false, "error": "solver timed out"}"#,
    );
    rtt()
        .args(["--schedule", &schedule, "load", "--file", &failure])
        .assert()
        .failure()
        .stderr(contains("solver timed out"));

    let no_timetable = write_input("load_failure_empty", r#"{"success": true}"#);
    rtt()
        .args(["--schedule", &schedule, "load", "--file", &no_timetable])
        .assert()
        .failure()
        .stderr(contains("no timetable"));

    let garbage = write_input("load_failure_garbage", "not json");
    rtt()
        .args(["--schedule", &schedule, "load", "--file", &garbage])
        .assert()
        .failure()
        .stderr(contains("Invalid schedule JSON"));

    rtt()
        .args(["--schedule", &schedule, "stats"])
        .assert()
        .success()
        .stdout(contains("Total classes    : 4"));
}

#[test]
fn test_last_load_wins() {
    let schedule = setup_schedule("load_twice");
    load_sample(&schedule, "load_twice_first");

    let second = json!([{
        "course_id": "PHY 101",
        "session_type": "Lab",
        "sections": "Section 1",
        "day_time": "Sunday 9:00 AM - 10:30 AM"
    }]);
    let input = write_input("load_twice_second", &second.to_string());
    rtt()
        .args(["--schedule", &schedule, "load", "--file", &input])
        .assert()
        .success();

    rtt()
        .args(["--schedule", &schedule, "stats"])
        .assert()
        .success()
        .stdout(contains("Total classes    : 1"));
}

#[test]
fn test_show_without_schedule_fails() {
    let schedule = setup_schedule("show_missing");
    rtt()
        .args(["--schedule", &schedule, "show"])
        .assert()
        .failure()
        .stderr(contains("No schedule loaded"));
}

#[test]
fn test_show_views() {
    let schedule = setup_schedule("show_views");
    load_sample(&schedule, "show_views_input");

    rtt()
        .args(["--schedule", &schedule, "--no-color", "show"])
        .assert()
        .success()
        .stdout(contains("Year 2"))
        .stdout(contains("Data Structures"));

    rtt()
        .args(["--schedule", &schedule, "--no-color", "show", "--view", "day"])
        .assert()
        .success()
        .stdout(contains("Sunday"))
        .stdout(contains("Instructor: Emmy Noether"));

    rtt()
        .args(["--schedule", &schedule, "--no-color", "show", "--view", "grid"])
        .assert()
        .success()
        .stdout(contains("Y2S1"))
        .stdout(contains("CSC 211"));
}

#[test]
fn test_show_json_respects_year_filter() {
    let schedule = setup_schedule("show_json");
    load_sample(&schedule, "show_json_input");

    let out = rtt()
        .args(["--schedule", &schedule, "--years", "1,2", "show", "--view", "table", "--json"])
        .output()
        .expect("run");
    assert!(out.status.success());

    let groups: Value = serde_json::from_slice(&out.stdout).expect("json output");
    let years: Vec<u64> = groups
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|g| g["year"].as_u64())
        .collect();
    assert_eq!(years, [1, 2]);
    assert_eq!(groups[1]["categories"][0]["kind"], "lecture");
    assert_eq!(
        groups[1]["categories"][0]["sessions"][0]["affected_sections"],
        json!(["Y2S1", "Y2S2", "Y2S3"])
    );
}

#[test]
fn test_empty_year_filter_shows_nothing() {
    let schedule = setup_schedule("show_empty_filter");
    load_sample(&schedule, "show_empty_filter_input");

    rtt()
        .args(["--schedule", &schedule, "--years", "3", "--no-color", "show"])
        .assert()
        .success()
        .stdout(contains("No sessions for the selected years."));
}

#[test]
fn test_invalid_year_is_rejected() {
    let schedule = setup_schedule("invalid_year");
    load_sample(&schedule, "invalid_year_input");

    rtt()
        .args(["--schedule", &schedule, "--years", "5", "stats"])
        .assert()
        .failure()
        .stderr(contains("Invalid academic year: 5"));
}

#[test]
fn test_summary_envelope() {
    let input = write_input(
        "summary_data",
        &json!({
            "success": true,
            "summary": { "courses": 12, "instructors": 7, "rooms": 5, "sections": 36, "timeslots": 20 }
        })
        .to_string(),
    );

    rtt()
        .args(["summary", "--file", &input])
        .assert()
        .success()
        .stdout(contains("Courses     : 12"))
        .stdout(contains("Time Slots  : 20"));
}

#[test]
fn test_validation_envelope() {
    let input = write_input(
        "summary_validation",
        &json!({
            "success": true,
            "validation": {
                "courses_count": 12,
                "instructors_count": 7,
                "rooms_count": 5,
                "years_found": [1, "2"],
                "room_types": { "lab": 2, "lecture": 3 },
                "warnings": ["Room C3 has no capacity"],
                "errors": []
            }
        })
        .to_string(),
    );

    rtt()
        .args(["summary", "--file", &input])
        .assert()
        .success()
        .stdout(contains("Found 12 courses, 7 instructors, 5 rooms"))
        .stdout(contains("Academic years: 1, 2"))
        .stdout(contains("Room types: 2 lab, 3 lecture"))
        .stdout(contains("warning: Room C3 has no capacity"));
}

#[test]
fn test_summary_failure_envelope() {
    let input = write_input(
        "summary_failure",
        r#"{"success": false, "message": "data files missing"}"#,
    );

    rtt()
        .args(["summary", "--file", &input])
        .assert()
        .failure()
        .stderr(contains("data files missing"));
}
