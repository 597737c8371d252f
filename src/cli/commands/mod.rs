pub mod config;
pub mod export;
pub mod init;
pub mod load;
pub mod show;
pub mod stats;
pub mod summary;

use crate::config::Config;
use crate::core::ScheduleContext;
use crate::errors::AppResult;
use crate::source::ScheduleStore;

/// Opens the held schedule with the configured year filter applied.
pub(crate) fn open_context(cfg: &Config) -> AppResult<ScheduleContext> {
    let store = ScheduleStore::new(cfg.schedule_file_path());
    let sessions = store.load()?;
    Ok(ScheduleContext::new(sessions, cfg.year_filter()?))
}
