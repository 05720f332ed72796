use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// The period a dashboard view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day(NaiveDate),
    /// Seven consecutive days starting at the given date.
    Week(NaiveDate),
    Month { year: i32, month: u32 },
    /// Inclusive span of dates.
    Range { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// Accepts "YYYY-MM-DD", "week:YYYY-MM-DD", "YYYY-MM" and
    /// "YYYY-MM-DD..YYYY-MM-DD".
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();

        if let Some((from, to)) = s.split_once("..") {
            let (Some(start), Some(end)) = (date::parse_date(from), date::parse_date(to)) else {
                return Err(AppError::InvalidPeriod(s.to_string()));
            };
            return Self::range(start, end);
        }

        if let Some(rest) = s.strip_prefix("week:") {
            return date::parse_date(rest)
                .map(Period::Week)
                .ok_or_else(|| AppError::InvalidPeriod(s.to_string()));
        }

        if let Some(d) = date::parse_date(s) {
            return Ok(Period::Day(d));
        }

        if let Ok(first) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            return Ok(Period::Month {
                year: first.year(),
                month: first.month(),
            });
        }

        Err(AppError::InvalidPeriod(s.to_string()))
    }

    /// Span from `start` to `end`, both included. A one-day span is a `Day`.
    pub fn range(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidPeriod(format!(
                "{} is before {}",
                date::format_date(end),
                date::format_date(start)
            )));
        }
        Ok(if start == end {
            Period::Day(start)
        } else {
            Period::Range { start, end }
        })
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        match *self {
            Period::Day(d) => vec![d],
            Period::Week(start) => date::consecutive_days(start, 7),
            Period::Month { year, month } => date::all_days_of_month(year, month),
            Period::Range { start, end } => start.iter_days().take_while(|d| *d <= end).collect(),
        }
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        match *self {
            Period::Day(day) => day == d,
            Period::Week(start) => d >= start && (d - start).num_days() < 7,
            Period::Month { year, month } => d.year() == year && d.month() == month,
            Period::Range { start, end } => start <= d && d <= end,
        }
    }

    pub fn is_single_day(&self) -> bool {
        matches!(self, Period::Day(_))
    }

    pub fn first_date(&self) -> NaiveDate {
        match *self {
            Period::Day(d) | Period::Week(d) | Period::Range { start: d, .. } => d,
            Period::Month { year, month } => NaiveDate::from_ymd_opt(year, month, 1)
                .unwrap_or(NaiveDate::MIN),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Day(d) => write!(f, "{}", date::format_date(*d)),
            Period::Week(d) => write!(f, "week:{}", date::format_date(*d)),
            Period::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            Period::Range { start, end } => write!(
                f,
                "{}..{}",
                date::format_date(*start),
                date::format_date(*end)
            ),
        }
    }
}
