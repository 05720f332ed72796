//! Time utilities: parsing HH:MM shift strings and formatting clock times.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;

/// Parse a strict "HH:MM" (24h) string.
pub fn parse_hhmm(t: &str) -> AppResult<NaiveTime> {
    let trimmed = t.trim();
    let well_formed = trimmed.len() == 5 && trimmed.as_bytes()[2] == b':';
    if !well_formed {
        return Err(AppError::MalformedTimeString {
            value: t.to_string(),
            agent: None,
            date: None,
        });
    }

    NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| AppError::MalformedTimeString {
        value: t.to_string(),
        agent: None,
        date: None,
    })
}

/// Wall-clock "HH:MM" of an instant in the given zone.
pub fn clock_in_zone(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%H:%M").to_string()
}

/// Zone abbreviation at the given instant (e.g. "EDT").
pub fn zone_abbreviation(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%Z").to_string()
}
