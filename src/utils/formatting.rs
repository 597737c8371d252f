//! Formatting utilities used for CLI and export outputs.

const COURSE_NAME_MAX: usize = 25;
const COURSE_NAME_KEEP: usize = 22;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Long course names are cut to 22 characters followed by `...`.
pub fn truncate_course_name(name: &str) -> String {
    if name.chars().count() > COURSE_NAME_MAX {
        let kept: String = name.chars().take(COURSE_NAME_KEEP).collect();
        format!("{kept}...")
    } else {
        name.to_string()
    }
}

/// "Ada King Lovelace" -> "Ada L."; single words are returned unchanged.
pub fn truncate_instructor_name(name: &str) -> String {
    let parts: Vec<&str> = name.split(' ').collect();
    match (parts.first(), parts.last()) {
        (Some(first), Some(last)) if parts.len() > 1 => match last.chars().next() {
            Some(initial) => format!("{first} {initial}."),
            None => format!("{first} ."),
        },
        _ => name.to_string(),
    }
}

/// `0.5` is a half slot, anything else a full one.
pub fn duration_label(duration: f64) -> &'static str {
    if duration == 0.5 { "½ slot" } else { "1 slot" }
}

/// Fits `s` into `width` display columns, appending `…` when cut.
pub fn fit(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if unicode_width::UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
