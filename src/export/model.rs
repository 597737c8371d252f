// src/export/model.rs

use crate::models::{ResolvedSession, TimeSlot};
use serde::Serialize;

/// Flat row of a resolved session for JSON / CSV export.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub year: u8,
    pub course_id: String,
    pub course_name: String,
    pub session_type: String,
    pub sections: String,
    pub affected_sections: String,
    pub day: String,
    pub time_slot: String,
    pub day_time: String,
    pub room: String,
    pub instructor: String,
    pub duration: f64,
}

impl From<&ResolvedSession> for SessionExport {
    fn from(s: &ResolvedSession) -> Self {
        let affected: Vec<String> = s.affected_sections.iter().map(|id| id.to_string()).collect();
        Self {
            year: s.year,
            course_id: s.course_id.clone(),
            course_name: s.course_name.clone(),
            session_type: s.session_type.clone(),
            sections: s.sections.clone(),
            affected_sections: affected.join(" "),
            day: s.day().to_string(),
            time_slot: TimeSlot::canonical_label(s.time_text()).to_string(),
            day_time: s.day_time.clone(),
            room: s.room.clone(),
            instructor: s.instructor.clone(),
            duration: s.duration,
        }
    }
}

pub(crate) fn to_rows(sessions: &[ResolvedSession]) -> Vec<SessionExport> {
    sessions.iter().map(SessionExport::from).collect()
}
