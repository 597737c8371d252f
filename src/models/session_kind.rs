use serde::Serialize;

/// The four session categories produced by the generator, in display order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Lecture,
    Lab,
    Tutorial,
    Project,
}

impl SessionKind {
    pub const ALL: [SessionKind; 4] = [
        SessionKind::Lecture,
        SessionKind::Lab,
        SessionKind::Tutorial,
        SessionKind::Project,
    ];

    /// Case-insensitive parse of the upstream `session_type` field.
    pub fn sk_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lecture" => Some(Self::Lecture),
            "lab" => Some(Self::Lab),
            "tutorial" => Some(Self::Tutorial),
            "project" => Some(Self::Project),
            _ => None,
        }
    }

    pub fn sk_as_str(&self) -> &'static str {
        match self {
            SessionKind::Lecture => "lecture",
            SessionKind::Lab => "lab",
            SessionKind::Tutorial => "tutorial",
            SessionKind::Project => "project",
        }
    }

    /// Plural label used by statistics badges ("3 Lectures").
    pub fn plural_label(&self) -> &'static str {
        match self {
            SessionKind::Lecture => "Lectures",
            SessionKind::Lab => "Labs",
            SessionKind::Tutorial => "Tutorials",
            SessionKind::Project => "Projects",
        }
    }

    pub fn is_lecture(&self) -> bool {
        matches!(self, SessionKind::Lecture)
    }
}
