//! Spreadsheet geometry for the timetable export.
//!
//! The sheet is a fixed matrix:
//! - rows: 2 header rows + 5 days x 4 slots
//! - columns: Day, Time + 4 years x 9 sections
//!
//! Merges, per-cell text and per-cell style are computed here; the XLSX
//! writer only serializes what it is given.

use crate::core::views::ScheduleMatrix;
use crate::models::section::{SECTIONS_PER_GROUP, SECTIONS_PER_YEAR};
use crate::models::year_filter::YEARS;
use crate::models::{Group, ResolvedSession, SectionId, SessionKind, TimeSlot, Weekday};
use serde::Serialize;

pub const HEADER_ROWS: u32 = 2;
pub const FIXED_COLS: u16 = 2;
pub const BODY_ROWS: u32 = (Weekday::ALL.len() * TimeSlot::ALL.len()) as u32;
pub const TOTAL_ROWS: u32 = HEADER_ROWS + BODY_ROWS;
pub const YEAR_COLS: u16 = SECTIONS_PER_YEAR as u16;
pub const TOTAL_COLS: u16 = FIXED_COLS + YEARS.len() as u16 * YEAR_COLS;

pub const DAY_COL_WIDTH: f64 = 15.0;
pub const TIME_COL_WIDTH: f64 = 20.0;
pub const SECTION_COL_WIDTH: f64 = 25.0;
pub const HEADER_ROW_HEIGHT_PX: u16 = 30;
pub const BODY_ROW_HEIGHT_PX: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StyleKind {
    Header,
    Lecture,
    Lab,
    Default,
}

impl StyleKind {
    /// Only lectures and labs get a dedicated fill; other kinds look like blanks.
    pub fn for_session(kind: Option<SessionKind>) -> Self {
        match kind {
            Some(SessionKind::Lecture) => StyleKind::Lecture,
            Some(SessionKind::Lab) => StyleKind::Lab,
            _ => StyleKind::Default,
        }
    }

    pub fn fill_rgb(&self) -> Option<u32> {
        match self {
            StyleKind::Header => Some(0xE0E0E0),
            StyleKind::Lecture => Some(0xFFF2CC),
            StyleKind::Lab => Some(0xDDEBF7),
            StyleKind::Default => None,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, StyleKind::Header)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BorderWeight {
    Thin,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellStyle {
    pub kind: StyleKind,
    pub bottom: BorderWeight,
    pub right: BorderWeight,
}

impl CellStyle {
    /// Bottom border is heavier under header row 1 and under each day's last slot.
    /// Right border is heavier after the Time column and after each year block.
    pub fn at(kind: StyleKind, row: u32, col: u16, is_last_slot: bool) -> Self {
        let bottom = if is_last_slot || row == HEADER_ROWS - 1 {
            BorderWeight::Medium
        } else {
            BorderWeight::Thin
        };
        let right = if is_block_boundary(col) {
            BorderWeight::Medium
        } else {
            BorderWeight::Thin
        };
        Self {
            kind,
            bottom,
            right,
        }
    }
}

/// Columns 1, 10, 19, 28, 37.
pub fn is_block_boundary(col: u16) -> bool {
    col == FIXED_COLS - 1 || (col >= FIXED_COLS && (col - FIXED_COLS + 1) % YEAR_COLS == 0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetCell {
    pub text: String,
    pub style: CellStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MergeKind {
    /// Day / Time captions spanning both header rows.
    Caption,
    Year,
    Group,
    Day,
    Lecture,
}

/// Inclusive rectangle of merged cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeRegion {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
    pub kind: MergeKind,
}

impl MergeRegion {
    fn new(first_row: u32, first_col: u16, last_row: u32, last_col: u16, kind: MergeKind) -> Self {
        Self {
            first_row,
            first_col,
            last_row,
            last_col,
            kind,
        }
    }

    pub fn contains(&self, row: u32, col: u16) -> bool {
        (self.first_row..=self.last_row).contains(&row)
            && (self.first_col..=self.last_col).contains(&col)
    }

    pub fn overlaps(&self, other: &MergeRegion) -> bool {
        self.first_row <= other.last_row
            && other.first_row <= self.last_row
            && self.first_col <= other.last_col
            && other.first_col <= self.last_col
    }

    pub fn is_within(&self, rows: u32, cols: u16) -> bool {
        self.first_row <= self.last_row
            && self.first_col <= self.last_col
            && self.last_row < rows
            && self.last_col < cols
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetLayout {
    pub rows: Vec<Vec<SheetCell>>,
    pub merges: Vec<MergeRegion>,
    /// Widths in characters, one per column.
    pub column_widths: Vec<f64>,
    /// Heights in pixels, one per row.
    pub row_heights: Vec<u16>,
}

pub fn column_for(section: SectionId) -> u16 {
    FIXED_COLS + (section.year() as u16 - 1) * YEAR_COLS + (section.number() as u16 - 1)
}

pub fn row_for(day: Weekday, slot: TimeSlot) -> u32 {
    HEADER_ROWS + (day.index() * TimeSlot::ALL.len() + slot.index()) as u32
}

/// Course name, session type, room and instructor, one per line.
pub fn cell_text(session: &ResolvedSession) -> String {
    [
        session.course_name.as_str(),
        session.session_type.as_str(),
        session.room.as_str(),
        session.instructor.as_str(),
    ]
    .join("\n")
}

impl SheetLayout {
    pub fn build(sessions: &[ResolvedSession]) -> Self {
        let matrix = ScheduleMatrix::build(sessions);
        let mut merges = Vec::new();
        let mut rows = header_rows(&mut merges);

        for day in Weekday::ALL {
            let first_row = row_for(day, TimeSlot::First);
            merges.push(MergeRegion::new(
                first_row,
                0,
                first_row + TimeSlot::ALL.len() as u32 - 1,
                0,
                MergeKind::Day,
            ));

            for slot in TimeSlot::ALL {
                rows.push(body_row(&matrix, day, slot, &mut merges));
            }
        }

        let mut column_widths = vec![DAY_COL_WIDTH, TIME_COL_WIDTH];
        column_widths.resize(TOTAL_COLS as usize, SECTION_COL_WIDTH);

        let mut row_heights = vec![HEADER_ROW_HEIGHT_PX; HEADER_ROWS as usize];
        row_heights.resize(TOTAL_ROWS as usize, BODY_ROW_HEIGHT_PX);

        Self {
            rows,
            merges,
            column_widths,
            row_heights,
        }
    }

    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn col_count(&self) -> u16 {
        self.rows.first().map_or(0, |r| r.len() as u16)
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&SheetCell> {
        self.rows.get(row as usize)?.get(col as usize)
    }
}

fn header_rows(merges: &mut Vec<MergeRegion>) -> Vec<Vec<SheetCell>> {
    let mut years_row = vec![String::new(); TOTAL_COLS as usize];
    let mut groups_row = vec![String::new(); TOTAL_COLS as usize];
    years_row[0] = "Day".to_string();
    years_row[1] = "Time".to_string();

    let mut col = FIXED_COLS;
    for year in YEARS {
        years_row[col as usize] = format!("Year {year}");
        merges.push(MergeRegion::new(0, col, 0, col + YEAR_COLS - 1, MergeKind::Year));

        for group in Group::ALL {
            groups_row[col as usize] = format!("Group {}", group.number());
            merges.push(MergeRegion::new(
                1,
                col,
                1,
                col + SECTIONS_PER_GROUP as u16 - 1,
                MergeKind::Group,
            ));
            col += SECTIONS_PER_GROUP as u16;
        }
    }

    merges.push(MergeRegion::new(0, 0, 1, 0, MergeKind::Caption));
    merges.push(MergeRegion::new(0, 1, 1, 1, MergeKind::Caption));

    [years_row, groups_row]
        .into_iter()
        .enumerate()
        .map(|(row, texts)| {
            texts
                .into_iter()
                .enumerate()
                .map(|(col, text)| SheetCell {
                    text,
                    style: CellStyle::at(StyleKind::Header, row as u32, col as u16, false),
                })
                .collect()
        })
        .collect()
}

fn body_row(
    matrix: &ScheduleMatrix<'_>,
    day: Weekday,
    slot: TimeSlot,
    merges: &mut Vec<MergeRegion>,
) -> Vec<SheetCell> {
    let row = row_for(day, slot);
    let last = slot.is_last();
    let styled = |text: String, kind: StyleKind, col: u16| SheetCell {
        text,
        style: CellStyle::at(kind, row, col, last),
    };

    let mut cells = Vec::with_capacity(TOTAL_COLS as usize);
    let day_text = if slot == TimeSlot::First {
        day.name().to_string()
    } else {
        String::new()
    };
    cells.push(styled(day_text, StyleKind::Default, 0));
    cells.push(styled(slot.label().to_string(), StyleKind::Default, 1));

    for year in YEARS {
        for group in Group::ALL {
            let occupants: Vec<(SectionId, Option<&ResolvedSession>)> = group
                .section_numbers()
                .into_iter()
                .filter_map(|n| SectionId::new(year, n))
                .map(|section| (section, matrix.get(day, slot, section)))
                .collect();

            if let Some(lecture) = shared_lecture(&occupants) {
                let kind = StyleKind::Lecture;
                let first_col = column_for(occupants[0].0);
                for (i, (section, _)) in occupants.iter().enumerate() {
                    let text = if i == 0 {
                        cell_text(lecture)
                    } else {
                        String::new()
                    };
                    cells.push(styled(text, kind, column_for(*section)));
                }
                merges.push(MergeRegion::new(
                    row,
                    first_col,
                    row,
                    first_col + SECTIONS_PER_GROUP as u16 - 1,
                    MergeKind::Lecture,
                ));
                continue;
            }

            for (section, occupant) in occupants {
                let col = column_for(section);
                cells.push(match occupant {
                    Some(s) => styled(cell_text(s), StyleKind::for_session(s.kind()), col),
                    None => styled(String::new(), StyleKind::Default, col),
                });
            }
        }
    }

    cells
}

/// The lecture occupying all three sections of a group, if one does.
fn shared_lecture<'a>(
    occupants: &[(SectionId, Option<&'a ResolvedSession>)],
) -> Option<&'a ResolvedSession> {
    let first = occupants.first()?.1?;
    if !first.is_lecture() || occupants.len() != SECTIONS_PER_GROUP as usize {
        return None;
    }
    occupants
        .iter()
        .all(|(_, o)| o.is_some_and(|s| std::ptr::eq(s, first)))
        .then_some(first)
}
