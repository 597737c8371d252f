//! Path utilities: expand ~, resolve export targets.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute paths are used as-is; relative ones need a configured `export_dir`.
pub fn resolve_export_path(file: &str, export_dir: Option<&str>) -> AppResult<PathBuf> {
    let path = expand_tilde(file);
    if path.is_absolute() {
        return Ok(path);
    }

    match export_dir {
        Some(dir) => Ok(expand_tilde(dir).join(path)),
        None => Err(AppError::Export(format!(
            "Output file path must be absolute (or set export_dir in the config): {file}"
        ))),
    }
}

pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}
