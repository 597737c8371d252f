// src/export/logic.rs

use crate::core::ScheduleContext;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_rows;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::resolve_export_path;
use std::path::PathBuf;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Exports the sessions of the context's current year filter.
    ///
    /// - `format`: explicit format, or `None` to infer it from the extension
    /// - `file`: absolute path, or relative to `export_dir` when configured
    /// - `force`: overwrite an existing file without asking
    ///
    /// Returns the path actually written.
    pub fn export(
        ctx: &ScheduleContext,
        format: Option<ExportFormat>,
        file: &str,
        export_dir: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = resolve_export_path(file, export_dir)?;

        let format = match format.or_else(|| ExportFormat::from_path(&path)) {
            Some(f) => f,
            None => {
                return Err(AppError::Export(format!(
                    "cannot infer export format from '{}'; use --format",
                    path.display()
                )));
            }
        };

        ensure_writable(&path, force)?;

        if ctx.resolved().is_empty() {
            warning(format!(
                "No sessions for {}: the {} file will only contain the empty layout.",
                ctx.filter().describe(),
                format.as_str()
            ));
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(&ctx.sheet_layout(), &path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(ctx);
                export_pdf(&ctx.grid_view(), &path, &title)?
            }
            ExportFormat::Json => export_json(&to_rows(ctx.resolved()), &path)?,
            ExportFormat::Csv => export_csv(&to_rows(ctx.resolved()), &path)?,
        }

        Ok(path)
    }
}

fn build_pdf_title(ctx: &ScheduleContext) -> String {
    format!("Timetable by section ({})", ctx.filter().describe())
}
