use crate::core::layout::SheetLayout;
use crate::core::resolver::resolve_filtered;
use crate::core::stats::{self, ScheduleStats};
use crate::core::views::{self, DayGrid, DayGroup, ScheduleMatrix, YearGroup};
use crate::models::{ResolvedSession, SectionId, SessionEntry, YearFilter};
use std::collections::BTreeSet;

/// The currently held schedule plus the active year filter.
///
/// The session list is a single-owner value replaced wholesale on every
/// load; the resolved subset is recomputed whenever either input changes.
#[derive(Debug, Clone, Default)]
pub struct ScheduleContext {
    sessions: Vec<SessionEntry>,
    filter: YearFilter,
    resolved: Vec<ResolvedSession>,
}

impl ScheduleContext {
    pub fn new(sessions: Vec<SessionEntry>, filter: YearFilter) -> Self {
        let resolved = resolve_filtered(&sessions, &filter);
        Self {
            sessions,
            filter,
            resolved,
        }
    }

    /// Replaces the held schedule; the latest call always wins.
    pub fn replace(&mut self, sessions: Vec<SessionEntry>) {
        self.sessions = sessions;
        self.refresh();
    }

    pub fn set_filter(&mut self, filter: YearFilter) {
        self.filter = filter;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.resolved = resolve_filtered(&self.sessions, &self.filter);
    }

    pub fn sessions(&self) -> &[SessionEntry] {
        &self.sessions
    }

    pub fn filter(&self) -> &YearFilter {
        &self.filter
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Resolved sessions of the selected years, in upstream order.
    pub fn resolved(&self) -> &[ResolvedSession] {
        &self.resolved
    }

    pub fn stats(&self) -> ScheduleStats {
        stats::compute(&self.resolved)
    }

    pub fn sections(&self) -> BTreeSet<SectionId> {
        views::list_sections(&self.resolved)
    }

    pub fn table_view(&self) -> Vec<YearGroup<'_>> {
        views::group_by_year_type(&self.resolved)
    }

    pub fn day_view(&self) -> Vec<DayGroup<'_>> {
        views::group_by_day(&self.resolved)
    }

    pub fn matrix(&self) -> ScheduleMatrix<'_> {
        ScheduleMatrix::build(&self.resolved)
    }

    pub fn grid_view(&self) -> Vec<DayGrid<'_>> {
        views::grid_view(&self.resolved)
    }

    pub fn sheet_layout(&self) -> SheetLayout {
        SheetLayout::build(&self.resolved)
    }
}
