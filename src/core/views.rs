//! Presentation-ready groupings of resolved sessions.
//!
//! All three views are pure functions of the (already year-filtered) input
//! and are rebuilt from scratch whenever the filter changes.

use crate::models::{ResolvedSession, SectionId, SessionKind, TimeSlot, Weekday};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

// ---------------------------
// Table view: year -> type
// ---------------------------

#[derive(Debug, Serialize)]
pub struct TypeGroup<'a> {
    pub kind: SessionKind,
    pub sessions: Vec<&'a ResolvedSession>,
}

#[derive(Debug, Serialize)]
pub struct YearGroup<'a> {
    pub year: u8,
    /// All sessions of the year, including ones with an unrecognised type.
    pub total: usize,
    /// Always the four kinds in display order; some may be empty.
    pub categories: Vec<TypeGroup<'a>>,
}

/// Groups by resolved year (ascending), then by session kind.
/// Within a kind, sessions are ordered by plain string comparison of `day_time`.
pub fn group_by_year_type(sessions: &[ResolvedSession]) -> Vec<YearGroup<'_>> {
    let mut by_year: BTreeMap<u8, Vec<&ResolvedSession>> = BTreeMap::new();
    for s in sessions {
        by_year.entry(s.year).or_default().push(s);
    }

    by_year
        .into_iter()
        .map(|(year, members)| {
            let categories = SessionKind::ALL
                .into_iter()
                .map(|kind| {
                    let mut of_kind: Vec<&ResolvedSession> = members
                        .iter()
                        .copied()
                        .filter(|s| s.kind() == Some(kind))
                        .collect();
                    of_kind.sort_by(|a, b| a.day_time.cmp(&b.day_time));
                    TypeGroup {
                        kind,
                        sessions: of_kind,
                    }
                })
                .collect();

            YearGroup {
                year,
                total: members.len(),
                categories,
            }
        })
        .collect()
}

// ---------------------------
// Day view
// ---------------------------

#[derive(Debug, Serialize)]
pub struct DayGroup<'a> {
    pub day: String,
    pub sessions: Vec<&'a ResolvedSession>,
}

/// Groups by the leading day token. Canonical days come first in
/// Sunday..Thursday order; unknown tokens follow alphabetically.
/// Within a day, sessions are ordered by the remaining time text.
pub fn group_by_day(sessions: &[ResolvedSession]) -> Vec<DayGroup<'_>> {
    let mut by_day: BTreeMap<(usize, &str), Vec<&ResolvedSession>> = BTreeMap::new();
    for s in sessions {
        let day = s.day();
        let rank = Weekday::from_name(day).map_or(usize::MAX, |d| d.index());
        by_day.entry((rank, day)).or_default().push(s);
    }

    by_day
        .into_iter()
        .map(|((_, day), mut members)| {
            members.sort_by(|a, b| a.time_text().cmp(b.time_text()));
            DayGroup {
                day: day.to_string(),
                sessions: members,
            }
        })
        .collect()
}

// ---------------------------
// Matrix view: day x slot x section
// ---------------------------

pub type CellKey = (Weekday, TimeSlot, SectionId);

/// Sparse day/slot/section placement. Sessions without a recognised day or
/// slot are not placed. A later session written to the same cell replaces
/// the earlier one.
#[derive(Debug, Default)]
pub struct ScheduleMatrix<'a> {
    cells: BTreeMap<CellKey, &'a ResolvedSession>,
}

impl<'a> ScheduleMatrix<'a> {
    pub fn build(sessions: &'a [ResolvedSession]) -> Self {
        let mut cells = BTreeMap::new();

        for s in sessions {
            let (Some(day), Some(slot)) = (Weekday::from_name(s.day()), s.slot()) else {
                continue;
            };
            for &section in &s.affected_sections {
                cells.insert((day, slot, section), s);
            }
        }

        Self { cells }
    }

    pub fn get(&self, day: Weekday, slot: TimeSlot, section: SectionId) -> Option<&'a ResolvedSession> {
        self.cells.get(&(day, slot, section)).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &&'a ResolvedSession)> {
        self.cells.iter()
    }

    /// Day name -> slot label -> section id -> session, for rendering layers.
    pub fn nested(&self) -> BTreeMap<String, BTreeMap<String, BTreeMap<String, &'a ResolvedSession>>> {
        let mut out: BTreeMap<String, BTreeMap<String, BTreeMap<String, &'a ResolvedSession>>> =
            BTreeMap::new();
        for (&(day, slot, section), &s) in &self.cells {
            out.entry(day.name().to_string())
                .or_default()
                .entry(slot.label().to_string())
                .or_default()
                .insert(section.to_string(), s);
        }
        out
    }
}

/// Every section touched by the schedule, ordered by year then number.
pub fn list_sections(sessions: &[ResolvedSession]) -> BTreeSet<SectionId> {
    sessions
        .iter()
        .flat_map(|s| s.affected_sections.iter().copied())
        .collect()
}

// ---------------------------
// Grid view: per day, sections as rows, slots as columns
// ---------------------------

#[derive(Debug, Serialize)]
pub struct SectionRow<'a> {
    pub section: SectionId,
    pub cells: [Option<&'a ResolvedSession>; 4],
}

#[derive(Debug, Serialize)]
pub struct DayGrid<'a> {
    pub day: Weekday,
    pub rows: Vec<SectionRow<'a>>,
}

/// One block per canonical day, even when the day is empty.
pub fn grid_view(sessions: &[ResolvedSession]) -> Vec<DayGrid<'_>> {
    let matrix = ScheduleMatrix::build(sessions);
    let sections = list_sections(sessions);

    Weekday::ALL
        .into_iter()
        .map(|day| DayGrid {
            day,
            rows: sections
                .iter()
                .map(|&section| SectionRow {
                    section,
                    cells: TimeSlot::ALL.map(|slot| matrix.get(day, slot, section)),
                })
                .collect(),
        })
        .collect()
}
