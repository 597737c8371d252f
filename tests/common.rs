#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimetable::core::resolver::resolve;
use rtimetable::models::{ResolvedSession, SessionEntry};
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so the
/// developer's own configuration is never read.
pub fn rtt() -> Command {
    let home = test_home();
    let mut cmd = cargo_bin_cmd!("rtimetable");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

pub fn test_home() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("rtimetable_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Unique schedule store path inside the system temp dir, removed first
pub fn setup_schedule(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetable_schedule.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path inside tempdir, removed first
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Writes `content` to a temp file and returns its path
pub fn write_input(name: &str, content: &str) -> String {
    let p = temp_out(name, "json");
    fs::write(&p, content).expect("write input file");
    p
}

/// Four sessions over years 1, 2 and 4:
/// - CSC 211 lecture (explicit year 2, Group 1, Monday first slot)
/// - CSC 211 lab (explicit year 2, Section 2, Tuesday second slot)
/// - MTH 111 tutorial (year 1 from the course id, Section 7, Sunday third slot, half slot)
/// - CSC 341 project (year 4 from the course id, Section 4, Thursday fourth slot)
pub fn sample_sessions() -> Value {
    json!([
        {
            "course_id": "CSC 211",
            "course_name": "Data Structures",
            "session_type": "Lecture",
            "sections": "Group 1",
            "day_time": "Monday 9:00 AM - 10:30 AM",
            "room": "A101",
            "instructor": "Ada King Lovelace",
            "duration": 1.0,
            "year": 2
        },
        {
            "course_id": "CSC 211",
            "course_name": "Data Structures",
            "session_type": "Lab",
            "sections": "Section 2",
            "day_time": "Tuesday 10:45 AM - 12:15 PM",
            "room": "Lab 3",
            "instructor": "Alan Turing",
            "duration": 1,
            "year": "2"
        },
        {
            "course_id": "MTH 111",
            "course_name": "Calculus",
            "session_type": "Tutorial",
            "sections": "Section 7",
            "day_time": "Sunday 12:30 PM - 2:00 PM",
            "room": "B12",
            "instructor": "Emmy Noether",
            "duration": 0.5
        },
        {
            "course_id": "CSC 341",
            "course_name": "Operating Systems",
            "session_type": "Project",
            "sections": "Section 4",
            "day_time": "Thursday 2:15 PM - 3:45 PM",
            "room": "C3",
            "instructor": "Linus",
            "duration": 1
        }
    ])
}

pub fn sample_entries() -> Vec<SessionEntry> {
    serde_json::from_value(sample_sessions()).expect("sample sessions decode")
}

pub fn sample_resolved() -> Vec<ResolvedSession> {
    sample_entries().iter().map(resolve).collect()
}

/// Builds one entry from a JSON object; missing fields take their defaults.
pub fn entry(value: Value) -> SessionEntry {
    serde_json::from_value(value).expect("entry decode")
}

/// Loads the sample schedule into `schedule`.
pub fn load_sample(schedule: &str, name: &str) {
    let input = write_input(name, &sample_sessions().to_string());
    rtt()
        .args(["--schedule", schedule, "load", "--file", &input])
        .assert()
        .success();
}
