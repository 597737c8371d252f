use crate::models::{ResolvedSession, SessionKind};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub lecture: usize,
    pub lab: usize,
    pub tutorial: usize,
    pub project: usize,
    /// Sessions whose type is none of the four known kinds.
    pub other: usize,
}

impl KindCounts {
    pub fn add(&mut self, kind: Option<SessionKind>) {
        match kind {
            Some(SessionKind::Lecture) => self.lecture += 1,
            Some(SessionKind::Lab) => self.lab += 1,
            Some(SessionKind::Tutorial) => self.tutorial += 1,
            Some(SessionKind::Project) => self.project += 1,
            None => self.other += 1,
        }
    }

    pub fn get(&self, kind: SessionKind) -> usize {
        match kind {
            SessionKind::Lecture => self.lecture,
            SessionKind::Lab => self.lab,
            SessionKind::Tutorial => self.tutorial,
            SessionKind::Project => self.project,
        }
    }

    pub fn total(&self) -> usize {
        self.lecture + self.lab + self.tutorial + self.project + self.other
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ScheduleStats {
    pub total: usize,
    pub instructors: usize,
    pub rooms: usize,
    pub days: usize,
    pub by_kind: KindCounts,
    pub by_year: BTreeMap<u8, KindCounts>,
}

/// Recomputed from whatever subset is passed in; nothing is cached.
pub fn compute(sessions: &[ResolvedSession]) -> ScheduleStats {
    let mut instructors = BTreeSet::new();
    let mut rooms = BTreeSet::new();
    let mut days = BTreeSet::new();
    let mut by_kind = KindCounts::default();
    let mut by_year: BTreeMap<u8, KindCounts> = BTreeMap::new();

    for s in sessions {
        let kind = s.kind();
        by_kind.add(kind);
        by_year.entry(s.year).or_default().add(kind);
        instructors.insert(s.instructor.as_str());
        rooms.insert(s.room.as_str());
        days.insert(s.day());
    }

    ScheduleStats {
        total: sessions.len(),
        instructors: instructors.len(),
        rooms: rooms.len(),
        days: days.len(),
        by_kind,
        by_year,
    }
}
