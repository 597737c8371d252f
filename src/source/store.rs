use crate::errors::{AppError, AppResult};
use crate::models::SessionEntry;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// On-disk copy of the currently held schedule (a bare JSON array).
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> AppResult<Vec<SessionEntry>> {
        if !self.path.exists() {
            return Err(AppError::NoSchedule(self.path.display().to_string()));
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Replaces the stored schedule wholesale. The write goes to a sibling
    /// temp file first so a failure never leaves a half-written schedule.
    pub fn replace(&self, sessions: &[SessionEntry]) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(sessions)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Reads a document from a file, or from stdin when `source` is `-`.
pub fn read_document(source: &str) -> AppResult<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read_to_string(source)?)
}
