//! Unified application error type.
//! Every module (core, models, cli, config) returns AppError so that a
//! failing agent or day is always reported with the same shape.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

/// " (agent a1, day 2025-06-02)", or whichever part is known.
fn context_suffix(agent: &Option<String>, date: &Option<NaiveDate>) -> String {
    match (agent, date) {
        (Some(id), Some(d)) => format!(" (agent {id}, day {d})"),
        (Some(id), None) => format!(" (agent {id})"),
        (None, Some(d)) => format!(" (day {d})"),
        (None, None) => String::new(),
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Time handling
    // ---------------------------
    #[error("Invalid timezone: {zone}{}", context_suffix(.agent, .date))]
    InvalidTimeZone {
        zone: String,
        agent: Option<String>,
        date: Option<NaiveDate>,
    },

    #[error(
        "Malformed time string (expected HH:MM): {value}{}",
        context_suffix(.agent, .date)
    )]
    MalformedTimeString {
        value: String,
        agent: Option<String>,
        date: Option<NaiveDate>,
    },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Attach the offending agent id to a time-related error.
    pub fn for_agent(mut self, agent_id: &str) -> Self {
        if let AppError::InvalidTimeZone { agent, .. } | AppError::MalformedTimeString { agent, .. } =
            &mut self
        {
            *agent = Some(agent_id.to_string());
        }
        self
    }

    /// Attach the day being built to a time-related error.
    pub fn for_day(mut self, day: NaiveDate) -> Self {
        if let AppError::InvalidTimeZone { date, .. } | AppError::MalformedTimeString { date, .. } =
            &mut self
        {
            *date = Some(day);
        }
        self
    }
}

pub type AppResult<T> = Result<T, AppError>;
