//! Terminal renderers for the three schedule views and the statistics panel.
//! Every function returns the text so callers decide where it goes.

use crate::core::color::color_for;
use crate::core::stats::{KindCounts, ScheduleStats};
use crate::core::views::{DayGrid, DayGroup, YearGroup};
use crate::models::{ResolvedSession, SectionId, SessionKind, TimeSlot};
use crate::source::{DataSummary, ValidationReport};
use crate::utils::colors::{colorize_empty, colorize_kind, paint_course};
use crate::utils::formatting::{bold, fit};
use crate::utils::table::{Column, Table};
use crate::utils::{duration_label, truncate_course_name, truncate_instructor_name};
use std::collections::BTreeSet;
use std::fmt::Write;

const GRID_CELL_WIDTH: usize = 24;

fn heading(out: &mut String, title: &str, colors: bool) {
    let line = format!("====================== {title}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", if colors { bold(&line) } else { line });
}

/// "5 Total | 2 Lectures | 3 Labs" (zero counts omitted).
pub fn kind_badges(counts: &KindCounts) -> String {
    let mut parts = vec![format!("{} Total", counts.total())];
    for kind in SessionKind::ALL {
        let n = counts.get(kind);
        if n > 0 {
            parts.push(format!("{n} {}", kind.plural_label()));
        }
    }
    parts.join(" | ")
}

pub fn render_table_view(groups: &[YearGroup<'_>], colors: bool) -> String {
    let mut out = String::new();
    if groups.is_empty() {
        let _ = writeln!(out, "No sessions for the selected years.");
        return out;
    }

    for group in groups {
        heading(&mut out, &format!("Year {}", group.year), colors);

        let mut counts = KindCounts::default();
        for cat in &group.categories {
            for s in &cat.sessions {
                counts.add(s.kind());
            }
        }
        counts.other = group.total - counts.total();
        let _ = writeln!(out, "{}", kind_badges(&counts));

        for cat in group.categories.iter().filter(|c| !c.sessions.is_empty()) {
            let label = cat.kind.sk_as_str().to_uppercase();
            let _ = writeln!(
                out,
                "\n{} ({} courses)",
                colorize_kind(&label, Some(cat.kind), colors),
                cat.sessions.len()
            );

            let mut table = Table::new(vec![
                Column::new("Course", 28),
                Column::new("Code", 10),
                Column::new("Type", 9),
                Column::new("Sections", 12),
                Column::new("Day / Time", 30),
                Column::new("Room", 10),
                Column::new("Instructor", 22),
                Column::new("Duration", 8),
            ]);

            for s in &cat.sessions {
                table.add_row(vec![
                    fit(&s.course_name, 28),
                    fit(&s.course_id, 10),
                    colorize_kind(&fit(&s.session_type, 9), s.kind(), colors),
                    fit(&s.sections, 12),
                    fit(&s.day_time, 30),
                    fit(&s.room, 10),
                    fit(&s.instructor, 22),
                    duration_label(s.duration).to_string(),
                ]);
            }
            out.push_str(&table.render());
        }
    }

    out
}

pub fn render_day_view(groups: &[DayGroup<'_>], colors: bool) -> String {
    let mut out = String::new();
    if groups.is_empty() {
        let _ = writeln!(out, "No sessions for the selected years.");
        return out;
    }

    for group in groups {
        heading(&mut out, &group.day, colors);
        for s in &group.sessions {
            let half = if s.is_half_slot() { " (½ slot)" } else { "" };
            let _ = writeln!(out, "{}{}", s.time_text(), half);
            let _ = writeln!(
                out,
                "  {} {}",
                paint_course(&s.course_name, color_for(&s.course_id), colors),
                colorize_empty(&format!("Y{}", s.year), colors)
            );
            let _ = writeln!(
                out,
                "  {} | {} | Room: {} | Instructor: {}",
                colorize_kind(&s.session_type, s.kind(), colors),
                s.sections,
                s.room,
                s.instructor
            );
        }
    }

    out
}

fn grid_cell(session: Option<&ResolvedSession>, colors: bool) -> String {
    match session {
        Some(s) => {
            let text = fit(
                &format!(
                    "{} {} {}",
                    s.course_id,
                    s.kind().map_or("?", |k| k.sk_as_str()),
                    s.room
                ),
                GRID_CELL_WIDTH,
            );
            paint_course(&text, color_for(&s.course_id), colors)
        }
        None => colorize_empty("-", colors),
    }
}

pub fn render_grid_view(grids: &[DayGrid<'_>], colors: bool) -> String {
    let mut out = String::new();
    if grids.iter().all(|g| g.rows.is_empty()) {
        let _ = writeln!(out, "No sections to display.");
        return out;
    }

    for grid in grids {
        heading(&mut out, grid.day.name(), colors);

        let mut columns = vec![Column::new("Section", 8)];
        columns.extend(
            TimeSlot::ALL
                .iter()
                .map(|slot| Column::new(slot.label(), GRID_CELL_WIDTH)),
        );
        let mut table = Table::new(columns);

        for row in &grid.rows {
            let mut cells = vec![row.section.to_string()];
            cells.extend(row.cells.iter().map(|c| grid_cell(*c, colors)));
            table.add_row(cells);
        }
        out.push_str(&table.render());
    }

    out
}

/// Compact cell description used outside the terminal (PDF export).
pub fn grid_cell_lines(s: &ResolvedSession) -> Vec<String> {
    vec![
        s.course_id.clone(),
        truncate_course_name(&s.course_name),
        s.room.clone(),
        truncate_instructor_name(&s.instructor),
        s.session_type.clone(),
    ]
}

pub fn render_stats(stats: &ScheduleStats, sections: &BTreeSet<SectionId>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Timetable Statistics");
    let _ = writeln!(out, "  Total classes    : {}", stats.total);
    let _ = writeln!(out, "  Instructors used : {}", stats.instructors);
    let _ = writeln!(out, "  Rooms used       : {}", stats.rooms);
    let _ = writeln!(out, "  Days used        : {}", stats.days);
    for kind in SessionKind::ALL {
        let _ = writeln!(
            out,
            "  {:<17}: {}",
            kind.plural_label(),
            stats.by_kind.get(kind)
        );
    }
    if stats.by_kind.other > 0 {
        let _ = writeln!(out, "  {:<17}: {}", "Other", stats.by_kind.other);
    }

    if !stats.by_year.is_empty() {
        let _ = writeln!(out, "\nBreakdown by Academic Year");
        for (year, counts) in &stats.by_year {
            let _ = writeln!(out, "  Year {year}: {}", kind_badges(counts));
        }
    }

    if !sections.is_empty() {
        let list: Vec<String> = sections.iter().map(|s| s.to_string()).collect();
        let _ = writeln!(out, "\nSections: {}", list.join(", "));
    }

    out
}

pub fn render_data_summary(summary: &DataSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Data Summary");
    let _ = writeln!(out, "  Courses     : {}", summary.courses);
    let _ = writeln!(out, "  Instructors : {}", summary.instructors);
    let _ = writeln!(out, "  Rooms       : {}", summary.rooms);
    let _ = writeln!(out, "  Sections    : {}", summary.sections);
    let _ = writeln!(out, "  Time Slots  : {}", summary.timeslots);
    out
}

pub fn render_validation(report: &ValidationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Found {} courses, {} instructors, {} rooms",
        report.courses_count, report.instructors_count, report.rooms_count
    );
    if !report.years_found.is_empty() {
        let _ = writeln!(out, "Academic years: {}", report.years_label());
    }
    if !report.room_types.is_empty() {
        let _ = writeln!(out, "Room types: {}", report.room_types_label());
    }
    for w in &report.warnings {
        let _ = writeln!(out, "warning: {w}");
    }
    for e in &report.errors {
        let _ = writeln!(out, "error: {e}");
    }
    out
}
