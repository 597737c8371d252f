//! Year / section resolution for loosely structured session records.
//!
//! Every function here is total: ambiguous or missing input falls through
//! to a default (year 1, no sections) instead of failing.

use crate::models::{Group, ResolvedSession, SectionId, SessionEntry, YearFilter};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

pub const DEFAULT_YEAR: u8 = 1;

static COURSE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])([0-9])[0-9]").expect("static course digit pattern"));

static SECTION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Section ([0-9]+)").expect("static section pattern"));

fn is_year(n: i64) -> bool {
    (1..=4).contains(&n)
}

/// Resolves the academic year of a session.
///
/// Priority:
/// 1. explicit `year` field, when within 1..=4
/// 2. first 3-digit run in `course_id`: second digit if 1..=4, else first digit if 1..=4
/// 3. a literal `(1)`..`(4)` marker in `course_name`
/// 4. [`DEFAULT_YEAR`]
pub fn resolve_year(entry: &SessionEntry) -> u8 {
    if let Some(y) = entry.year
        && is_year(y)
    {
        return y as u8;
    }

    year_from_course_id(&entry.course_id)
        .or_else(|| year_from_course_name(&entry.course_name))
        .unwrap_or(DEFAULT_YEAR)
}

/// "CSC 211" → 1 (second digit), "CSC 511" → 1, "CSC 251" → 2 (first digit fallback).
pub fn year_from_course_id(course_id: &str) -> Option<u8> {
    let caps = COURSE_DIGITS.captures(course_id)?;
    let digit = |i: usize| -> Option<i64> { caps.get(i)?.as_str().parse().ok() };

    let first = digit(1)?;
    let second = digit(2)?;

    if is_year(second) {
        Some(second as u8)
    } else if is_year(first) {
        Some(first as u8)
    } else {
        None
    }
}

fn year_from_course_name(course_name: &str) -> Option<u8> {
    (1..=4u8).find(|y| course_name.contains(&format!("({y})")))
}

/// Sections occupied by a session in the given year.
///
/// Lectures name a group ("Group 2") and occupy its three sections; every
/// other type names one section ("Section 5"). Matching is case-sensitive.
pub fn resolve_affected_sections(entry: &SessionEntry, year: u8) -> BTreeSet<SectionId> {
    if entry.is_lecture() {
        return Group::ALL
            .into_iter()
            .find(|g| entry.sections.contains(&g.marker()))
            .map(|g| {
                g.section_numbers()
                    .into_iter()
                    .filter_map(|n| SectionId::new(year, n))
                    .collect()
            })
            .unwrap_or_default();
    }

    SECTION_NUMBER
        .captures(&entry.sections)
        .and_then(|caps| caps.get(1)?.as_str().parse::<u8>().ok())
        .and_then(|n| SectionId::new(year, n))
        .into_iter()
        .collect()
}

pub fn resolve(entry: &SessionEntry) -> ResolvedSession {
    let year = resolve_year(entry);
    ResolvedSession {
        affected_sections: resolve_affected_sections(entry, year),
        entry: entry.clone(),
        year,
    }
}

/// Resolves every entry and keeps only the selected years, preserving input order.
pub fn resolve_filtered(entries: &[SessionEntry], filter: &YearFilter) -> Vec<ResolvedSession> {
    entries
        .iter()
        .map(resolve)
        .filter(|r| filter.contains(r.year))
        .collect()
}
