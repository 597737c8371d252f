use crate::cli::parser::{Commands, View};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::ui::render::{kind_badges, render_day_view, render_grid_view, render_table_view};

use super::open_context;

/// Handle the `show` command: render one of the three views.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { view, json } = cmd {
        let view = match view {
            Some(v) => *v,
            None => View::from_name(&cfg.default_view)
                .ok_or_else(|| AppError::InvalidView(cfg.default_view.clone()))?,
        };

        let ctx = open_context(cfg)?;

        if *json {
            let text = match view {
                View::Table => serde_json::to_string_pretty(&ctx.table_view())?,
                View::Day => serde_json::to_string_pretty(&ctx.day_view())?,
                View::Grid => serde_json::to_string_pretty(&ctx.grid_view())?,
            };
            println!("{text}");
            return Ok(());
        }

        header(format!(
            "Timetable ({}): {}",
            ctx.filter().describe(),
            kind_badges(&ctx.stats().by_kind)
        ));

        let colors = cfg.use_colors;
        let out = match view {
            View::Table => render_table_view(&ctx.table_view(), colors),
            View::Day => render_day_view(&ctx.day_view(), colors),
            View::Grid => render_grid_view(&ctx.grid_view(), colors),
        };
        print!("{out}");
    }
    Ok(())
}
