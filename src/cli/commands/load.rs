use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ScheduleContext;
use crate::errors::AppResult;
use crate::source::store::read_document;
use crate::source::{ScheduleStore, decode_schedule};
use crate::ui::messages::{busy, success, warning};
use crate::ui::render::kind_badges;

/// Handle the `load` command.
///
/// The document is fully decoded before the store is touched, so a failed
/// load keeps the previously held schedule.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Load { file } = cmd {
        let source = if file == "-" { "stdin" } else { file.as_str() };
        busy(format!("Reading timetable from {source}"));

        let text = read_document(file)?;
        let sessions = decode_schedule(&text)?;

        let store = ScheduleStore::new(cfg.schedule_file_path());
        store.replace(&sessions)?;

        let ctx = ScheduleContext::new(sessions, cfg.year_filter()?);
        if ctx.is_empty() {
            warning("The loaded timetable contains no sessions.");
        }

        success(format!(
            "Timetable loaded into {} ({} sessions)",
            store.path().display(),
            ctx.sessions().len()
        ));
        println!("{}", kind_badges(&ctx.stats().by_kind));
    }
    Ok(())
}
