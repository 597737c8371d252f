use super::session_kind::SessionKind;
use super::time_slot::{TimeSlot, split_day_time};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One scheduled class meeting, exactly as returned by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub session_type: String,
    #[serde(default)]
    pub sections: String,
    #[serde(default)]
    pub day_time: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Authoritative academic year when the generator knows it.
    #[serde(
        default,
        deserialize_with = "lenient_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i64>,
}

fn default_duration() -> f64 {
    1.0
}

/// Accepts `2`, `2.0` or `"2"`; anything else counts as absent.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

impl SessionEntry {
    pub fn kind(&self) -> Option<SessionKind> {
        SessionKind::sk_from_str(&self.session_type)
    }

    pub fn is_lecture(&self) -> bool {
        self.kind().is_some_and(|k| k.is_lecture())
    }

    /// Leading day token of `day_time` ("Monday").
    pub fn day(&self) -> &str {
        split_day_time(&self.day_time).0
    }

    /// Everything after the day token ("9:00 AM - 10:30 AM").
    pub fn time_text(&self) -> &str {
        split_day_time(&self.day_time).1
    }

    pub fn slot(&self) -> Option<TimeSlot> {
        TimeSlot::canonicalize(self.time_text())
    }

    pub fn is_half_slot(&self) -> bool {
        self.duration == 0.5
    }
}
