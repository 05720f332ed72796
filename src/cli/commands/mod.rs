pub mod categories;
pub mod config;
pub mod render;

use crate::errors::{AppError, AppResult};
use crate::models::{AgentTimelineData, Period, Snapshot};
use chrono::{Datelike, NaiveDate};
use std::path::Path;

/// Period given on the command line, or the smallest one covering every
/// snapshot date: a single date -> that day, under 7 days -> week from the
/// first date, one calendar month -> that month, otherwise the exact span.
pub(crate) fn resolve_period(period: &Option<String>, snapshot: &Snapshot) -> AppResult<Period> {
    if let Some(p) = period {
        return Period::parse(p);
    }

    let dates: Vec<NaiveDate> = snapshot
        .agents
        .iter()
        .flat_map(|a| a.days.iter().map(|d| d.date))
        .collect();

    let (Some(&min), Some(&max)) = (dates.iter().min(), dates.iter().max()) else {
        return Ok(Period::Day(crate::utils::date::today()));
    };

    let inferred = if min == max {
        Period::Day(min)
    } else if (max - min).num_days() < 7 {
        Period::Week(min)
    } else if (min.year(), min.month()) == (max.year(), max.month()) {
        Period::Month {
            year: min.year(),
            month: min.month(),
        }
    } else {
        Period::range(min, max)?
    };

    tracing::debug!(period = %inferred, "period inferred from snapshot");
    Ok(inferred)
}

/// Load a snapshot and fetch the selected agents for the resolved period.
pub(crate) fn load_selection(
    snapshot_path: &str,
    period: &Option<String>,
    agents: &[String],
) -> AppResult<(Snapshot, Period, Vec<AgentTimelineData>)> {
    let path = Path::new(snapshot_path);
    if !path.exists() {
        return Err(AppError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("snapshot not found: {snapshot_path}"),
        )));
    }

    let snapshot = Snapshot::load(path)?;
    let period = resolve_period(period, &snapshot)?;
    let selected = snapshot.fetch(agents, &period);

    Ok((snapshot, period, selected))
}
