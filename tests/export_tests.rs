mod common;

use common::{entry, load_sample, rtt, setup_schedule, temp_out, write_input};
use predicates::str::contains;
use rtimetable::core::ScheduleContext;
use rtimetable::core::layout::MergeKind;
use rtimetable::export::{ExportFormat, ExportLogic};
use rtimetable::models::YearFilter;
use serde_json::{Value, json};
use std::fs;

/// Value of the first `/Count N` entry, i.e. the page tree size.
fn pdf_page_count(bytes: &[u8]) -> usize {
    let text = String::from_utf8_lossy(bytes);
    let start = text.find("/Count ").expect("page tree count") + "/Count ".len();
    text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .expect("page count")
}

#[test]
fn test_export_json() {
    let schedule = setup_schedule("export_json");
    load_sample(&schedule, "export_json_input");
    let out = temp_out("export_json", "json");

    rtt()
        .args(["--schedule", &schedule, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let rows: Value = serde_json::from_str(&fs::read_to_string(&out).expect("read")).expect("json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["year"], 2);
    assert_eq!(rows[0]["affected_sections"], "Y2S1 Y2S2 Y2S3");
    assert_eq!(rows[0]["day"], "Monday");
    assert_eq!(rows[0]["time_slot"], "9:00 AM - 10:30 AM");
    assert_eq!(rows[2]["duration"], 0.5);
}

#[test]
fn test_export_csv_uses_year_filter() {
    let schedule = setup_schedule("export_csv");
    load_sample(&schedule, "export_csv_input");
    let out = temp_out("export_csv", "csv");

    rtt()
        .args(["--schedule", &schedule, "--years", "1", "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("year,course_id,course_name"));
    assert!(lines[1].contains("MTH 111"));
    assert!(lines[1].contains("Y1S7"));
}

#[test]
fn test_export_xlsx() {
    let schedule = setup_schedule("export_xlsx");
    load_sample(&schedule, "export_xlsx_input");
    let out = temp_out("export_xlsx", "xlsx");

    rtt()
        .args(["--schedule", &schedule, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read");
    assert!(bytes.starts_with(b"PK"), "xlsx is a zip container");
}

#[test]
fn test_export_pdf() {
    let schedule = setup_schedule("export_pdf");
    load_sample(&schedule, "export_pdf_input");
    let out = temp_out("export_pdf", "pdf");

    rtt()
        .args(["--schedule", &schedule, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_pdf_paginates_a_full_grid() {
    let schedule = setup_schedule("export_pdf_pages");
    let mut sessions = Vec::new();
    for year in 1..=4 {
        for n in 1..=9 {
            sessions.push(json!({
                "course_id": format!("LAB {year}{n}0"),
                "session_type": "Lab",
                "sections": format!("Section {n}"),
                "day_time": "Sunday 9:00 AM - 10:30 AM",
                "year": year
            }));
        }
    }
    let input = write_input("export_pdf_pages_input", &Value::Array(sessions).to_string());
    rtt()
        .args(["--schedule", &schedule, "load", "--file", &input])
        .assert()
        .success();

    let out = temp_out("export_pdf_pages", "pdf");
    rtt()
        .args(["--schedule", &schedule, "export", "--format", "pdf", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read");
    assert!(bytes.starts_with(b"%PDF"));
    assert!(pdf_page_count(&bytes) > 1, "36 section rows do not fit one page");
    assert!(String::from_utf8_lossy(&bytes).contains("cont."), "continued heading");
}

#[test]
fn test_export_xlsx_writes_every_lecture_merge() {
    let mut sessions = Vec::new();
    for year in 1..=4 {
        for group in 1..=3 {
            sessions.push(entry(json!({
                "course_id": format!("LEC {year}{group}1"),
                "session_type": "Lecture",
                "sections": format!("Group {group}"),
                "day_time": "Monday 9:00 AM - 10:30 AM",
                "year": year
            })));
        }
    }
    let ctx = ScheduleContext::new(sessions, YearFilter::all());

    let layout = ctx.sheet_layout();
    let lectures = layout.merges.iter().filter(|m| m.kind == MergeKind::Lecture).count();
    assert_eq!(lectures, 12);
    assert_eq!(layout.merges.len(), 4 + 12 + 2 + 5 + lectures);

    let out = temp_out("export_xlsx_lectures", "xlsx");
    let written = ExportLogic::export(&ctx, Some(ExportFormat::Xlsx), &out, None, true)
        .expect("xlsx export with a lecture in every group");
    let bytes = fs::read(&written).expect("read");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_empty_filter_warns_but_writes() {
    let schedule = setup_schedule("export_empty");
    load_sample(&schedule, "export_empty_input");
    let out = temp_out("export_empty", "json");

    rtt()
        .args(["--schedule", &schedule, "--years", "3", "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No sessions for year 3"));

    assert_eq!(fs::read_to_string(&out).expect("read").trim(), "[]");
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let schedule = setup_schedule("export_existing");
    load_sample(&schedule, "export_existing_input");
    let out = temp_out("export_existing", "json");
    fs::write(&out, "keep me").expect("seed");

    rtt()
        .args(["--schedule", &schedule, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    rtt()
        .args(["--schedule", &schedule, "export", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with('['));

    fs::write(&out, "keep me").expect("seed");
    rtt()
        .args(["--schedule", &schedule, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with('['));
}

#[test]
fn test_export_relative_path_without_export_dir() {
    let schedule = setup_schedule("export_relative");
    load_sample(&schedule, "export_relative_input");

    rtt()
        .args(["--schedule", &schedule, "export", "--file", "relative_out.json"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_unknown_extension() {
    let schedule = setup_schedule("export_unknown");
    load_sample(&schedule, "export_unknown_input");
    let out = temp_out("export_unknown", "txt");

    rtt()
        .args(["--schedule", &schedule, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("cannot infer export format"));
}

#[test]
fn test_export_without_schedule() {
    let schedule = setup_schedule("export_missing");
    let out = temp_out("export_missing", "json");

    rtt()
        .args(["--schedule", &schedule, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("No schedule loaded"));
    assert!(!std::path::Path::new(&out).exists());
}
