// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Checks that the export target can be written.
///
/// - missing file → Ok (parent directories are created)
/// - existing file with `force` → Ok
/// - existing file without `force` → asks for confirmation on stdin
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir)?;
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    confirm(&answer)
}

fn confirm(answer: &str) -> AppResult<()> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        )),
    }
}
