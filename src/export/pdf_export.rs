// src/export/pdf_export.rs

use crate::core::color::color_for;
use crate::core::views::DayGrid;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::{GridBlock, GridCell, GridRow, PdfManager};
use crate::models::TimeSlot;
use crate::ui::messages::busy;
use crate::ui::render::grid_cell_lines;
use std::path::Path;

/// Export of the per-day section grid as a paginated landscape PDF.
pub(crate) fn export_pdf(grids: &[DayGrid<'_>], path: &Path, title: &str) -> AppResult<()> {
    busy(format!("Exporting to PDF: {}", path.display()));

    let blocks = to_blocks(grids);
    let footer = format!("Generated {}", chrono::Local::now().format("%Y-%m-%d %H:%M"));

    let mut pdf = PdfManager::new();
    pdf.write_grid(title, &footer, &blocks);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF write error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

fn to_blocks(grids: &[DayGrid<'_>]) -> Vec<GridBlock> {
    let headers: Vec<String> = TimeSlot::ALL.iter().map(|s| s.label().to_string()).collect();

    grids
        .iter()
        .filter(|g| !g.rows.is_empty())
        .map(|g| GridBlock {
            title: g.day.name().to_string(),
            headers: headers.clone(),
            rows: g
                .rows
                .iter()
                .map(|row| GridRow {
                    label: row.section.to_string(),
                    cells: row
                        .cells
                        .iter()
                        .map(|cell| {
                            cell.map(|s| {
                                let color = color_for(&s.course_id);
                                GridCell {
                                    lines: grid_cell_lines(s),
                                    fill: color.fill_rgb(),
                                    border: color.border_rgb(),
                                }
                            })
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
