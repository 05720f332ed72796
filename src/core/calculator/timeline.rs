use super::{combined, markers};
use crate::errors::AppResult;
use crate::models::{AgentConfig, AgentShift, FilteredDay, TimelineItem};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[serde(alias = "single")]
    SingleDay,
    #[serde(alias = "rolling")]
    MultiDayRolling,
    #[serde(alias = "combined")]
    MultiDayCombined,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::SingleDay => "single-day",
            ViewMode::MultiDayRolling => "multi-day-rolling",
            ViewMode::MultiDayCombined => "multi-day-combined",
        }
    }
}

pub fn resolve_shifts(agents: &[AgentConfig], date: NaiveDate) -> AppResult<Vec<AgentShift>> {
    agents
        .iter()
        .map(|a| a.shift_for(date).map_err(|e| e.for_day(date)))
        .collect()
}

/// Run of consecutive days with no visible tickets.
#[derive(Debug, Clone, Copy)]
struct EmptyRun {
    start: NaiveDate,
    end: NaiveDate,
    count: usize,
}

impl EmptyRun {
    fn extend(run: Option<EmptyRun>, date: NaiveDate) -> EmptyRun {
        match run {
            None => EmptyRun {
                start: date,
                end: date,
                count: 1,
            },
            Some(r) => EmptyRun {
                end: date,
                count: r.count + 1,
                ..r
            },
        }
    }

    fn into_item(self) -> TimelineItem {
        TimelineItem::EmptyGap {
            start_date: self.start,
            end_date: self.end,
            count: self.count,
        }
    }
}

/// Build the flat item list for `mode` from already-filtered days.
///
/// Nothing is carried between calls; every rebuild starts from scratch.
pub fn assemble(
    days: &[FilteredDay],
    mode: ViewMode,
    agents: &[AgentConfig],
    reference_tz: Tz,
) -> AppResult<Vec<TimelineItem>> {
    let mut ordered: Vec<&FilteredDay> = days.iter().collect();
    ordered.sort_by_key(|d| d.date);

    tracing::debug!(mode = mode.as_str(), days = ordered.len(), "assembling timeline");

    match mode {
        ViewMode::SingleDay => assemble_single(ordered.first().copied(), agents, reference_tz),
        ViewMode::MultiDayCombined => assemble_combined(&ordered, agents, reference_tz),
        ViewMode::MultiDayRolling => assemble_rolling(&ordered, agents, reference_tz),
    }
}

fn assemble_single(
    day: Option<&FilteredDay>,
    agents: &[AgentConfig],
    reference_tz: Tz,
) -> AppResult<Vec<TimelineItem>> {
    let Some(day) = day else {
        return Ok(Vec::new());
    };

    let shifts = resolve_shifts(agents, day.date)?;
    Ok(markers::insert_markers(
        &day.tickets,
        &shifts,
        day.window_end,
        reference_tz,
    ))
}

fn assemble_combined(
    days: &[&FilteredDay],
    agents: &[AgentConfig],
    reference_tz: Tz,
) -> AppResult<Vec<TimelineItem>> {
    let Some(reference_day) = days.first() else {
        return Ok(Vec::new());
    };

    let shifts = resolve_shifts(agents, reference_day.date)?;
    let tickets: Vec<_> = days.iter().flat_map(|d| d.tickets.iter().cloned()).collect();

    Ok(combined::project_combined(
        &tickets,
        &shifts,
        reference_day.window_end,
        reference_tz,
    ))
}

fn assemble_rolling(
    days: &[&FilteredDay],
    agents: &[AgentConfig],
    reference_tz: Tz,
) -> AppResult<Vec<TimelineItem>> {
    let mut out = Vec::new();
    let mut pending: Option<EmptyRun> = None;

    for day in days {
        if day.is_empty() {
            pending = Some(EmptyRun::extend(pending, day.date));
            continue;
        }

        if let Some(run) = pending.take() {
            out.push(run.into_item());
        }

        out.push(TimelineItem::DayHeader {
            date: day.date,
            picked_count: day.picked_count(),
            not_picked_count: day.not_picked_count(),
            total: day.tickets.len(),
        });

        let shifts = resolve_shifts(agents, day.date)?;
        out.extend(markers::insert_markers(
            &day.tickets,
            &shifts,
            day.window_end,
            reference_tz,
        ));
    }

    if let Some(run) = pending {
        out.push(run.into_item());
    }

    Ok(out)
}
