//! Deterministic display colours derived from a course identifier.
//! Collisions are fine; only determinism matters.

use serde::Serialize;

const NEUTRAL_FILL: (u8, u8, u8) = (0x4a, 0x55, 0x68);
const NEUTRAL_BORDER: (u8, u8, u8) = (0x2d, 0x37, 0x48);
const FILL_ALPHA: f32 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CourseColor {
    /// Fixed gray pair used when the course id is empty.
    Neutral,
    Hsl {
        hue: u16,
        saturation: u8,
        lightness: u8,
    },
}

/// Polynomial string hash with 32-bit signed wraparound
/// (`hash = c + ((hash << 5) - hash)` over UTF-16 code units).
pub fn course_hash(course_id: &str) -> i32 {
    course_id.encode_utf16().fold(0i32, |hash, c| {
        (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

pub fn color_for(course_id: &str) -> CourseColor {
    if course_id.is_empty() {
        return CourseColor::Neutral;
    }

    let h = course_hash(course_id).unsigned_abs();
    CourseColor::Hsl {
        hue: (h % 360) as u16,
        saturation: 65 + (h % 20) as u8,
        lightness: 35 + (h % 15) as u8,
    }
}

impl CourseColor {
    /// CSS fill, e.g. `hsla(210, 70%, 40%, 0.85)`.
    pub fn fill_css(&self) -> String {
        match self {
            CourseColor::Neutral => hex(NEUTRAL_FILL),
            CourseColor::Hsl {
                hue,
                saturation,
                lightness,
            } => format!("hsla({hue}, {saturation}%, {lightness}%, {FILL_ALPHA})"),
        }
    }

    /// CSS border, 10 points darker than the fill.
    pub fn border_css(&self) -> String {
        match self {
            CourseColor::Neutral => hex(NEUTRAL_BORDER),
            CourseColor::Hsl {
                hue,
                saturation,
                lightness,
            } => format!("hsl({hue}, {saturation}%, {}%)", lightness.saturating_sub(10)),
        }
    }

    /// Opaque RGB approximation of the fill, for terminals and PDF.
    pub fn fill_rgb(&self) -> (u8, u8, u8) {
        match *self {
            CourseColor::Neutral => NEUTRAL_FILL,
            CourseColor::Hsl {
                hue,
                saturation,
                lightness,
            } => hsl_to_rgb(hue, saturation, lightness),
        }
    }

    pub fn border_rgb(&self) -> (u8, u8, u8) {
        match *self {
            CourseColor::Neutral => NEUTRAL_BORDER,
            CourseColor::Hsl {
                hue,
                saturation,
                lightness,
            } => hsl_to_rgb(hue, saturation, lightness.saturating_sub(10)),
        }
    }
}

fn hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn hsl_to_rgb(hue: u16, saturation: u8, lightness: u8) -> (u8, u8, u8) {
    let s = saturation as f32 / 100.0;
    let l = lightness as f32 / 100.0;
    let h = (hue % 360) as f32 / 60.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r), to_u8(g), to_u8(b))
}
