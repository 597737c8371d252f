//! Status lines shown to the user while a command runs.

use ansi_term::Colour::{self, Blue, Green, Red, Yellow};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_BUSY: &str = "⏳";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {msg}", colour.bold().paint(icon))
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Blue, ICON_INFO, msg));
}

/// A step that may take a moment (decoding, rendering, writing a file).
pub fn busy<T: fmt::Display>(msg: T) {
    println!("{}", line(Blue, ICON_BUSY, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Red, ICON_ERR, msg));
}

/// Section header ("====== Year 2")
pub fn header<T: fmt::Display>(msg: T) {
    let text = format!("====================== {msg}");
    println!("\n{}", Blue.bold().paint(text));
}
