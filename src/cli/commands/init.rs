use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::source::ScheduleStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.schedule.clone(), cli.test)?;

    info("Initializing rTimetable…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗓️  Schedule   : {}", cfg.schedule_file);

    let store = ScheduleStore::new(cfg.schedule_file_path());
    if !store.exists() {
        info("No schedule held yet: run `rtimetable load --file <FILE>`.");
    }

    success("rTimetable initialization completed!");
    Ok(())
}
