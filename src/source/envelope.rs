use crate::errors::{AppError, AppResult};
use crate::models::SessionEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// `{success, message|error, ...}` wrapper shared by every generator endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub timetable: Option<Vec<SessionEntry>>,
    #[serde(default)]
    pub summary: Option<DataSummary>,
    #[serde(default)]
    pub validation: Option<ValidationReport>,
}

/// Input data counts reported by the data-summary endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataSummary {
    #[serde(default)]
    pub courses: usize,
    #[serde(default)]
    pub instructors: usize,
    #[serde(default)]
    pub rooms: usize,
    #[serde(default)]
    pub sections: usize,
    #[serde(default)]
    pub timeslots: usize,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationReport {
    #[serde(default)]
    pub courses_count: usize,
    #[serde(default)]
    pub instructors_count: usize,
    #[serde(default)]
    pub rooms_count: usize,
    #[serde(default)]
    pub sections_count: Option<usize>,
    #[serde(default)]
    pub timeslots_count: Option<usize>,
    /// Numbers or strings, depending on how the generator read its CSV.
    #[serde(default)]
    pub years_found: Vec<Value>,
    #[serde(default)]
    pub room_types: BTreeMap<String, usize>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn years_label(&self) -> String {
        let years: Vec<String> = self
            .years_found
            .iter()
            .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
            .collect();
        years.join(", ")
    }

    /// "3 lab, 5 lecture"
    pub fn room_types_label(&self) -> String {
        let parts: Vec<String> = self
            .room_types
            .iter()
            .map(|(kind, count)| format!("{count} {kind}"))
            .collect();
        parts.join(", ")
    }
}

impl ServiceEnvelope {
    pub fn parse(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turns a non-success envelope into [`AppError::Upstream`].
    pub fn into_success(self) -> AppResult<Self> {
        if self.success {
            return Ok(self);
        }
        let reason = self
            .error
            .or(self.message)
            .unwrap_or_else(|| "no reason given".to_string());
        Err(AppError::Upstream(reason))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScheduleDocument {
    Bare(Vec<SessionEntry>),
    Envelope(ServiceEnvelope),
}

/// Accepts either a bare array of sessions or a generate-response envelope.
pub fn decode_schedule(json: &str) -> AppResult<Vec<SessionEntry>> {
    match serde_json::from_str::<ScheduleDocument>(json)? {
        ScheduleDocument::Bare(sessions) => Ok(sessions),
        ScheduleDocument::Envelope(envelope) => envelope.into_success()?.timetable.ok_or_else(|| {
            AppError::Upstream("response carries no timetable".to_string())
        }),
    }
}
