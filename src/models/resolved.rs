use super::section::SectionId;
use super::session::SessionEntry;
use serde::Serialize;
use std::collections::BTreeSet;
use std::ops::Deref;

/// A session enriched with its academic year and the sections it occupies.
/// Recomputed from scratch on every view; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSession {
    #[serde(flatten)]
    pub entry: SessionEntry,
    #[serde(rename = "resolved_year")]
    pub year: u8,
    pub affected_sections: BTreeSet<SectionId>,
}

impl Deref for ResolvedSession {
    type Target = SessionEntry;

    fn deref(&self) -> &SessionEntry {
        &self.entry
    }
}
