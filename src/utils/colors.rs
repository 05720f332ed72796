/// ANSI color helper utilities for terminal output.
use ansi_term::Colour;

const RESET: &str = "\x1b[0m";
const GREY: &str = "\x1b[90m";

/// Parse a "#rrggbb" accent into a truecolor ANSI colour.
pub fn accent_colour(accent: &str) -> Option<Colour> {
    let hex = accent.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Colour::RGB(r, g, b))
}

/// Paint `text` with the agent accent, or leave it plain when the accent is
/// missing or unparsable.
pub fn paint_accent(text: &str, accent: Option<&str>) -> String {
    match accent.and_then(accent_colour) {
        Some(c) => c.paint(text).to_string(),
        None => text.to_string(),
    }
}

/// Background tickets (not picked by any selected agent) are dimmed.
pub fn dim(text: &str) -> String {
    format!("{GREY}{text}{RESET}")
}

pub fn priority_colour(priority: i32) -> Colour {
    match priority {
        4 => Colour::Red,
        3 => Colour::Yellow,
        2 => Colour::Blue,
        _ => Colour::White,
    }
}
