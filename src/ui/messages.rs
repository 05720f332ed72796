//! One-line user messages. Status lines go to stdout, warnings and errors
//! to stderr so rendered JSON on stdout stays parseable.

use ansi_term::{Colour, Style};
use std::fmt;

fn tagged(style: Style, icon: &str, msg: impl fmt::Display) -> String {
    format!("{} {msg}", style.paint(icon))
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Blue.bold(), "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Green.bold(), "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(Colour::Yellow.bold(), "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(Colour::Red.bold(), "❌", msg));
}

/// Section title, e.g. "=== Categories for 2025-06 ===".
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", Colour::Blue.bold().paint(format!("=== {msg} ===")));
}
