//! Local wall-clock time in an IANA zone -> UTC instant.
//!
//! The offset is taken from a UTC-noon probe of the requested date and then
//! applied to the whole day. On a daylight-saving transition day, local
//! times on the far side of the switch are off by the DST delta.

use crate::errors::{AppError, AppResult};
use crate::utils::{date, time};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::LazyLock;

static OFFSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:GMT|UTC)?([+-])(\d{1,2})(?::?(\d{2}))?$").expect("offset pattern compiles")
});

/// Look up an IANA zone identifier.
pub fn parse_zone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::InvalidTimeZone {
            zone: name.to_string(),
            agent: None,
            date: None,
        })
}

/// Parse a short numeric offset ("+05:30", "-08", "GMT+9", "Z") into minutes
/// east of UTC.
pub fn parse_offset_minutes(s: &str) -> Option<i32> {
    let s = s.trim();
    if matches!(s, "Z" | "GMT" | "UTC") {
        return Some(0);
    }

    let caps = OFFSET_RE.captures(s)?;
    let sign = if &caps[1] == "-" { -1 } else { 1 };
    let hours: i32 = caps[2].parse().ok()?;
    let minutes: i32 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    if hours > 14 || minutes > 59 {
        return None;
    }

    Some(sign * (hours * 60 + minutes))
}

/// Offset of `tz` on `date`, probed at 12:00 UTC.
pub fn noon_offset_minutes(date: NaiveDate, tz: Tz) -> AppResult<i32> {
    let probe = date.and_time(NaiveTime::MIN) + Duration::hours(12);
    let formatted = probe.and_utc().with_timezone(&tz).format("%:z").to_string();

    parse_offset_minutes(&formatted)
        .ok_or_else(|| AppError::Other(format!("unparsable offset '{formatted}' for {tz}")))
}

/// Convert `date` + `hhmm` in `tz` to a UTC instant.
pub fn zoned_local_to_utc(date: NaiveDate, hhmm: &str, tz: Tz) -> AppResult<DateTime<Utc>> {
    let local = time::parse_hhmm(hhmm)?;
    let offset = noon_offset_minutes(date, tz)?;
    let naive_utc = date.and_time(local).and_utc();

    Ok(naive_utc - Duration::minutes(i64::from(offset)))
}

/// String-typed entry point: "YYYY-MM-DD", "HH:MM", "Area/City".
pub fn local_to_utc(date_str: &str, hhmm: &str, zone: &str) -> AppResult<DateTime<Utc>> {
    let tz = parse_zone(zone)?;
    let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;
    zoned_local_to_utc(d, hhmm, tz)
}

/// Calendar date of an instant in `tz`.
pub fn local_date(at: DateTime<Utc>, tz: Tz) -> NaiveDate {
    at.with_timezone(&tz).date_naive()
}

/// Time of day of an instant in `tz`.
pub fn local_time_of_day(at: DateTime<Utc>, tz: Tz) -> NaiveTime {
    at.with_timezone(&tz).time()
}
