use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::render_stats;

use super::open_context;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ctx = open_context(cfg)?;

    header(format!("Statistics for {}", ctx.filter().describe()));
    print!("{}", render_stats(&ctx.stats(), &ctx.sections()));
    Ok(())
}
