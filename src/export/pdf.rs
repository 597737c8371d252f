use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Colour of a grid cell, 0-255 per channel.
pub type Rgb = (u8, u8, u8);

const GRID_LINE: Rgb = (0xA6, 0xA6, 0xA6);

/// One occupied grid cell: text lines plus background colour.
pub struct GridCell {
    pub lines: Vec<String>,
    pub fill: Rgb,
    pub border: Rgb,
}

/// One row of a day block: the section label and one cell per slot.
pub struct GridRow {
    pub label: String,
    pub cells: Vec<Option<GridCell>>,
}

/// One table per day.
pub struct GridBlock {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<GridRow>,
}

/// Landscape A4 writer for the section grid, paginated on a fixed page height.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    header_h: f32,
    row_h: f32,
    label_w: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 842.0,
            page_h: 595.0,
            margin: 30.0,
            header_h: 18.0,
            row_h: 54.0,
            label_w: 58.0,

            next_id,
            font_id,

            font_size: 7.5,
            header_font_size: 9.0,
            title_font_size: 13.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str, rgb: Rgb) {
        let bytes = win_ansi(text);
        content.save_state();
        content.set_fill_rgb(unit(rgb.0), unit(rgb.1), unit(rgb.2));
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
        content.restore_state();
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_box(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Option<Rgb>,
        stroke: Rgb,
    ) {
        content.save_state();
        if let Some((r, g, b)) = fill {
            content.set_fill_rgb(unit(r), unit(g), unit(b));
            content.rect(x, y, w, h);
            content.fill_nonzero();
        }
        content.set_stroke_rgb(unit(stroke.0), unit(stroke.1), unit(stroke.2));
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn slot_width(&self, slots: usize) -> f32 {
        (self.page_w - 2.0 * self.margin - self.label_w) / slots.max(1) as f32
    }

    /// Max characters per line for a column of width `w`.
    fn chars_for(&self, w: f32) -> usize {
        ((w - 6.0) / (self.font_size * 0.52)).max(4.0) as usize
    }

    fn draw_header_row(&self, content: &mut Content, y: f32, headers: &[String]) {
        let slot_w = self.slot_width(headers.len());
        let grey = Some((0xE0, 0xE0, 0xE0));
        let black = (0, 0, 0);

        self.draw_box(content, self.margin, y, self.label_w, self.header_h, grey, GRID_LINE);
        self.draw_text(content, self.margin + 4.0, y + 5.0, self.header_font_size, "Section", black);

        let mut x = self.margin + self.label_w;
        for h in headers {
            self.draw_box(content, x, y, slot_w, self.header_h, grey, GRID_LINE);
            self.draw_text(content, x + 4.0, y + 5.0, self.header_font_size, h, black);
            x += slot_w;
        }
    }

    fn draw_grid_row(&self, content: &mut Content, y: f32, row: &GridRow) {
        let slot_w = self.slot_width(row.cells.len());
        let black = (0, 0, 0);
        let white = (0xFF, 0xFF, 0xFF);

        self.draw_box(content, self.margin, y, self.label_w, self.row_h, None, GRID_LINE);
        self.draw_text(
            content,
            self.margin + 4.0,
            y + self.row_h / 2.0 - 3.0,
            self.header_font_size,
            &row.label,
            black,
        );

        let line_h = self.font_size + 2.0;
        let max_lines = ((self.row_h - 4.0) / line_h) as usize;
        let width = self.chars_for(slot_w);

        let mut x = self.margin + self.label_w;
        for cell in &row.cells {
            match cell {
                Some(c) => {
                    self.draw_box(content, x, y, slot_w, self.row_h, Some(c.fill), c.border);
                    let wrapped: Vec<String> = c
                        .lines
                        .iter()
                        .flat_map(|l| textwrap::wrap(l, width))
                        .map(|l| l.into_owned())
                        .take(max_lines)
                        .collect();
                    let mut ty = y + self.row_h - line_h;
                    for line in &wrapped {
                        self.draw_text(content, x + 3.0, ty, self.font_size, line, white);
                        ty -= line_h;
                    }
                }
                None => self.draw_box(content, x, y, slot_w, self.row_h, None, GRID_LINE),
            }
            x += slot_w;
        }
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, footer: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 8.0,
            self.title_font_size,
            title,
            (0, 0, 0),
        );

        let text = format!("{footer}    Page {page}");
        self.draw_text(
            content,
            self.page_w - self.margin - 220.0,
            self.margin - 20.0,
            self.font_size,
            &text,
            (0x55, 0x55, 0x55),
        );
    }

    /// Draws every block in order. A block heading plus header row always
    /// stays together; rows that do not fit move to a fresh page where the
    /// heading is repeated.
    pub fn write_grid(&mut self, title: &str, footer: &str, blocks: &[GridBlock]) {
        let top = self.page_h - self.margin - 24.0;
        let bottom = self.margin;
        let heading_h = self.title_font_size + 6.0;

        let mut page_idx = 1;
        let mut content = self.new_page();
        self.draw_page_header_footer(&mut content, title, footer, page_idx);
        let mut y = top;

        for block in blocks {
            let mut rows: &[GridRow] = &block.rows;
            let mut continued = false;

            loop {
                let needed = heading_h + self.header_h + self.row_h.min(rows.len() as f32 * self.row_h);
                if y - needed < bottom && y < top {
                    self.finalize_page(content);
                    page_idx += 1;
                    content = self.new_page();
                    self.draw_page_header_footer(&mut content, title, footer, page_idx);
                    y = top;
                }

                let heading = if continued {
                    format!("{} (cont.)", block.title)
                } else {
                    block.title.clone()
                };
                y -= heading_h;
                self.draw_text(&mut content, self.margin, y + 4.0, self.header_font_size + 2.0, &heading, (0, 0, 0));

                y -= self.header_h;
                self.draw_header_row(&mut content, y, &block.headers);

                let mut consumed = 0;
                for row in rows {
                    if y - self.row_h < bottom {
                        break;
                    }
                    y -= self.row_h;
                    self.draw_grid_row(&mut content, y, row);
                    consumed += 1;
                }

                rows = &rows[consumed..];
                if rows.is_empty() {
                    y -= 10.0;
                    break;
                }

                continued = true;
                self.finalize_page(content);
                page_idx += 1;
                content = self.new_page();
                self.draw_page_header_footer(&mut content, title, footer, page_idx);
                y = top;
            }
        }

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn unit(c: u8) -> f32 {
    c as f32 / 255.0
}

/// Latin-1 subset of WinAnsi; anything else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code < 0x80 || (0xA0..=0xFF).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}
