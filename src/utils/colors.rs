/// ANSI color helper utilities for terminal output.
use crate::core::color::CourseColor;
use crate::models::SessionKind;
use ansi_term::{Colour, Style};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const GREEN: &str = "\x1b[32m";

/// Badge colour per session kind, matching the spreadsheet fills in spirit.
pub fn color_for_kind(kind: Option<SessionKind>) -> &'static str {
    match kind {
        Some(SessionKind::Lecture) => YELLOW,
        Some(SessionKind::Lab) => BLUE,
        Some(SessionKind::Tutorial) => GREEN,
        Some(SessionKind::Project) => MAGENTA,
        None => GREY,
    }
}

/// Wraps `text` in the kind colour, or returns it unchanged when colours are off.
pub fn colorize_kind(text: &str, kind: Option<SessionKind>, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("{}{text}{RESET}", color_for_kind(kind))
}

/// White text on the course's own background colour.
pub fn paint_course(text: &str, color: CourseColor, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    let (r, g, b) = color.fill_rgb();
    Style::new()
        .on(Colour::RGB(r, g, b))
        .fg(Colour::White)
        .bold()
        .paint(text)
        .to_string()
}

/// Grey placeholder for empty cells.
pub fn colorize_empty(value: &str, enabled: bool) -> String {
    if !enabled {
        return value.to_string();
    }
    format!("{GREY}{value}{RESET}")
}
