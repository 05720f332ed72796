use crate::core::calculator::timezone;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Default window used when an agent's shift string is malformed.
pub const FALLBACK_SHIFT_START: &str = "09:00";
pub const FALLBACK_SHIFT_END: &str = "17:00";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentConfig {
    pub id: String,
    pub first_name: String,
    pub local_shift_start: String,
    pub local_shift_end: String,
    pub iana_time_zone: String,
    pub display_city: String,
    pub accent: Option<String>,
}

/// An agent's shift pinned to concrete UTC instants for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentShift {
    pub agent_id: String,
    pub first_name: String,
    pub display_city: String,
    pub accent: Option<String>,
    pub local_start: String,
    pub local_end: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AgentConfig {
    pub fn new(id: &str, name: &str, start: &str, end: &str, zone: &str) -> Self {
        Self {
            id: id.to_string(),
            first_name: first_name_of(name),
            local_shift_start: start.to_string(),
            local_shift_end: end.to_string(),
            iana_time_zone: zone.to_string(),
            display_city: city_from_zone(zone),
            accent: None,
        }
    }

    pub fn with_accent(mut self, accent: &str) -> Self {
        self.accent = Some(accent.to_string());
        self
    }

    pub fn zone(&self) -> AppResult<Tz> {
        timezone::parse_zone(&self.iana_time_zone).map_err(|e| e.for_agent(&self.id))
    }

    /// Resolve the shift for `date` into UTC instants.
    ///
    /// An unknown zone fails. A malformed "HH:MM" falls back to 09:00–17:00
    /// for this agent only. Shifts whose end is not after their start run
    /// into the following day.
    pub fn shift_for(&self, date: NaiveDate) -> AppResult<AgentShift> {
        let tz = self.zone()?;

        let (local_start, local_end, start, end) = match (
            timezone::zoned_local_to_utc(date, &self.local_shift_start, tz),
            timezone::zoned_local_to_utc(date, &self.local_shift_end, tz),
        ) {
            (Ok(s), Ok(e)) => (
                self.local_shift_start.trim().to_string(),
                self.local_shift_end.trim().to_string(),
                s,
                e,
            ),
            (Err(AppError::MalformedTimeString { .. }), _)
            | (_, Err(AppError::MalformedTimeString { .. })) => {
                tracing::warn!(
                    agent = %self.id,
                    start = %self.local_shift_start,
                    end = %self.local_shift_end,
                    "malformed shift time, using {FALLBACK_SHIFT_START}-{FALLBACK_SHIFT_END}"
                );
                (
                    FALLBACK_SHIFT_START.to_string(),
                    FALLBACK_SHIFT_END.to_string(),
                    timezone::zoned_local_to_utc(date, FALLBACK_SHIFT_START, tz)?,
                    timezone::zoned_local_to_utc(date, FALLBACK_SHIFT_END, tz)?,
                )
            }
            (Err(e), _) | (_, Err(e)) => return Err(e.for_agent(&self.id)),
        };

        let end = if end <= start {
            end + Duration::days(1)
        } else {
            end
        };

        Ok(AgentShift {
            agent_id: self.id.clone(),
            first_name: self.first_name.clone(),
            display_city: self.display_city.clone(),
            accent: self.accent.clone(),
            local_start,
            local_end,
            start,
            end,
        })
    }
}

/// "Maria Elena Ruiz" -> "Maria"
pub fn first_name_of(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or(name)
        .to_string()
}

/// "America/Los_Angeles" -> "Los Angeles"
pub fn city_from_zone(zone: &str) -> String {
    zone.rsplit('/')
        .next()
        .unwrap_or(zone)
        .replace('_', " ")
}
