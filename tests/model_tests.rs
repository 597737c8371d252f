mod common;

use rtimetable::core::color::{CourseColor, color_for, course_hash};
use rtimetable::models::time_slot::split_day_time;
use rtimetable::models::{Group, SectionId, SessionKind, TimeSlot, Weekday, YearFilter};
use rtimetable::utils::{duration_label, truncate_course_name, truncate_instructor_name};

#[test]
fn every_marker_maps_to_its_label() {
    let cases = [
        ("9:00 AM - 10:30 AM", "9:00 AM - 10:30 AM"),
        ("10:45 AM - 12:15 PM", "10:45 AM - 12:15 PM"),
        ("12:30 PM - 2:00 PM", "12:30 PM - 2:00 PM"),
        ("2:15 PM - 3:45 PM", "2:15 PM - 3:45 PM"),
        ("starts 2:15 PM sharp", "2:15 PM - 3:45 PM"),
    ];
    for (input, label) in cases {
        assert_eq!(TimeSlot::canonical_label(input), label);
    }
}

#[test]
fn unmapped_time_text_yields_empty_label() {
    assert_eq!(TimeSlot::canonicalize("8:00 AM - 9:30 AM"), None);
    assert_eq!(TimeSlot::canonical_label("9:00 - 10:30"), "");
    assert_eq!(TimeSlot::canonical_label(""), "");
}

#[test]
fn canonicalization_is_idempotent() {
    for slot in TimeSlot::ALL {
        assert_eq!(TimeSlot::canonicalize(slot.label()), Some(slot));
        assert_eq!(
            TimeSlot::canonical_label(TimeSlot::canonical_label(slot.marker())),
            slot.label()
        );
    }
}

#[test]
fn day_time_split() {
    assert_eq!(
        split_day_time("Monday 9:00 AM - 10:30 AM"),
        ("Monday", "9:00 AM - 10:30 AM")
    );
    assert_eq!(split_day_time("Monday"), ("Monday", ""));
}

#[test]
fn weekdays_in_canonical_order() {
    let names: Vec<&str> = Weekday::ALL.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"]);
    assert_eq!(Weekday::from_name("Tuesday"), Some(Weekday::Tuesday));
    assert_eq!(Weekday::from_name("Friday"), None);
    assert_eq!(Weekday::from_name("monday"), None);
}

#[test]
fn session_kind_parsing() {
    assert_eq!(SessionKind::sk_from_str("Lecture"), Some(SessionKind::Lecture));
    assert_eq!(SessionKind::sk_from_str(" LAB "), Some(SessionKind::Lab));
    assert_eq!(SessionKind::sk_from_str("seminar"), None);
}

#[test]
fn section_ids() {
    let id = SectionId::new(2, 5).expect("valid");
    assert_eq!(id.to_string(), "Y2S5");
    assert_eq!(id.group(), Group::new(2).expect("group"));
    assert!(!id.starts_group());
    assert!(SectionId::new(2, 4).expect("valid").starts_group());

    assert!(SectionId::new(0, 1).is_none());
    assert!(SectionId::new(5, 1).is_none());
    assert!(SectionId::new(1, 10).is_none());
    assert!("Y3S9".parse::<SectionId>().is_ok());
    assert!("Y3S0".parse::<SectionId>().is_err());
    assert!("S3Y1".parse::<SectionId>().is_err());
}

#[test]
fn year_filter_operations() {
    let mut f = YearFilter::default();
    assert_eq!(f, YearFilter::all());
    assert_eq!(f.describe(), "all years");

    f.clear_all();
    assert!(f.is_empty());
    assert_eq!(f.describe(), "no years");

    f.select_all();
    assert!((1..=4).all(|y| f.contains(y)));

    let f = YearFilter::from_years(&[3, 1, 3]).expect("years");
    assert_eq!(f.years().collect::<Vec<_>>(), [1, 3]);
    assert_eq!(f.describe(), "year 1, 3");

    assert!(YearFilter::from_years(&[5]).is_err());
    assert!(YearFilter::from_years(&[0]).is_err());
}

#[test]
fn hash_uses_signed_wraparound() {
    assert_eq!(course_hash(""), 0);
    assert_eq!(course_hash("a"), 97);
    assert_eq!(course_hash("ab"), 98 + 97 * 31);
    // long inputs overflow without panicking
    let _ = course_hash(&"CSC".repeat(200));
}

#[test]
fn color_is_deterministic_and_bounded() {
    let a = color_for("CSC211");
    let b = color_for("CSC211");
    assert_eq!(a, b);

    match a {
        CourseColor::Hsl {
            hue,
            saturation,
            lightness,
        } => {
            assert!(hue < 360);
            assert!((65..85).contains(&saturation));
            assert!((35..50).contains(&lightness));
        }
        CourseColor::Neutral => panic!("non-empty id must not be neutral"),
    }

    assert_eq!(a.fill_css(), b.fill_css());
    assert!(a.fill_css().starts_with("hsla("));
}

#[test]
fn empty_course_id_is_neutral() {
    let c = color_for("");
    assert_eq!(c, CourseColor::Neutral);
    assert_eq!(c.fill_css(), "#4a5568");
    assert_eq!(c.border_css(), "#2d3748");
    assert_eq!(c.fill_rgb(), (0x4a, 0x55, 0x68));
}

#[test]
fn display_truncation() {
    assert_eq!(truncate_course_name("Data Structures"), "Data Structures");
    let long = "Introduction to Distributed Systems";
    let cut = truncate_course_name(long);
    assert_eq!(cut, "Introduction to Distri...");
    assert_eq!(cut.chars().count(), 25);
    assert_eq!(truncate_course_name(&"x".repeat(25)), "x".repeat(25));

    assert_eq!(truncate_instructor_name("Ada King Lovelace"), "Ada L.");
    assert_eq!(truncate_instructor_name("Linus"), "Linus");
}

#[test]
fn duration_labels() {
    assert_eq!(duration_label(0.5), "½ slot");
    assert_eq!(duration_label(1.0), "1 slot");
    assert_eq!(duration_label(2.0), "1 slot");
}
