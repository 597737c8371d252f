// src/export/xlsx.rs

use crate::core::layout::{BorderWeight, CellStyle, SheetLayout};
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::busy;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet, XlsxError,
};
use std::collections::HashMap;
use std::path::Path;

pub(crate) const SHEET_NAME: &str = "Timetable";

/// Writes the timetable layout to a single worksheet: every cell is written
/// with its own style, then merges are applied on top.
pub(crate) fn export_xlsx(layout: &SheetLayout, path: &Path) -> AppResult<()> {
    busy(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    write_layout(worksheet, layout).map_err(to_export_error)?;

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_layout(worksheet: &mut Worksheet, layout: &SheetLayout) -> Result<(), XlsxError> {
    let mut formats: HashMap<CellStyle, Format> = HashMap::new();

    // ---------------------------
    // Cells
    // ---------------------------
    for (r, row) in layout.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let fmt = formats
                .entry(cell.style)
                .or_insert_with(|| cell_format(&cell.style));
            if cell.text.is_empty() {
                worksheet.write_blank(r as u32, c as u16, fmt)?;
            } else {
                worksheet.write_string_with_format(r as u32, c as u16, &cell.text, fmt)?;
            }
        }
    }

    // ---------------------------
    // Merges
    // ---------------------------
    for m in &layout.merges {
        let Some(anchor) = layout.cell(m.first_row, m.first_col) else {
            continue;
        };
        let fmt = formats
            .entry(anchor.style)
            .or_insert_with(|| cell_format(&anchor.style))
            .clone();
        worksheet.merge_range(
            m.first_row,
            m.first_col,
            m.last_row,
            m.last_col,
            &anchor.text,
            &fmt,
        )?;

        // merge_range copies the anchor format everywhere; restore per-cell borders
        for r in m.first_row..=m.last_row {
            for c in m.first_col..=m.last_col {
                if (r, c) == (m.first_row, m.first_col) {
                    continue;
                }
                if let Some(cell) = layout.cell(r, c) {
                    let fmt = formats
                        .entry(cell.style)
                        .or_insert_with(|| cell_format(&cell.style));
                    worksheet.write_blank(r, c, fmt)?;
                }
            }
        }
    }

    // ---------------------------
    // Geometry
    // ---------------------------
    for (c, w) in layout.column_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w)?;
    }
    for (r, h) in layout.row_heights.iter().enumerate() {
        worksheet.set_row_height_pixels(r as u32, u32::from(*h))?;
    }

    worksheet.set_freeze_panes(2, 2)?;
    Ok(())
}

fn border(weight: BorderWeight) -> FormatBorder {
    match weight {
        BorderWeight::Thin => FormatBorder::Thin,
        BorderWeight::Medium => FormatBorder::Medium,
    }
}

fn cell_format(style: &CellStyle) -> Format {
    let mut format = Format::new()
        .set_font_name("Calibri")
        .set_font_size(11)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin)
        .set_border_bottom(border(style.bottom))
        .set_border_right(border(style.right));

    if style.kind.is_bold() {
        format = format.set_bold();
    }
    if let Some(rgb) = style.kind.fill_rgb() {
        format = format
            .set_background_color(Color::RGB(rgb))
            .set_pattern(FormatPattern::Solid);
    }

    format
}

fn to_export_error(e: XlsxError) -> AppError {
    AppError::Export(format!("XLSX writer error: {e}"))
}
