use crate::core::calculator::merge::{AgentDataset, OwnershipConflict, merge_agents};
use crate::core::calculator::timeline::{ViewMode, assemble};
use crate::core::calculator::{collapse, filter};
use crate::errors::AppResult;
use crate::models::{AgentTimelineData, FilterState, FilteredDay, Period, TimelineItem};
use chrono::{NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything a single timeline build needs. Built fresh for every change
/// of agent selection, period or filter.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    pub agents: Vec<AgentTimelineData>,
    pub period: Period,
    pub mode: ViewMode,
    pub filter: FilterState,
    pub display_tz: Tz,
    pub accent_palette: Vec<String>,
    pub collapse_markers: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimelineTotals {
    pub picked_count: usize,
    pub not_picked_count: usize,
    pub hidden_by_filter_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineView {
    pub mode: ViewMode,
    pub items: Vec<TimelineItem>,
    pub totals: TimelineTotals,
    /// Distinct categories of all merged tickets, before filtering.
    pub categories: Vec<String>,
    pub conflicts: Vec<OwnershipConflict>,
}

impl TimelineView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ticket_count(&self) -> usize {
        self.items.iter().filter(|i| i.as_ticket().is_some()).count()
    }
}

pub struct Core;

impl Core {
    /// Attach accents by selection order and split into merger input.
    pub fn datasets(agents: &[AgentTimelineData], palette: &[String]) -> Vec<AgentDataset> {
        agents
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let accent = if palette.is_empty() {
                    None
                } else {
                    Some(palette[i % palette.len()].as_str())
                };
                AgentDataset {
                    agent: a.config(accent),
                    days: a.days.clone(),
                }
            })
            .collect()
    }

    /// Raw provider data -> merged -> filtered -> assembled -> collapsed.
    pub fn build_view(req: &ViewRequest) -> AppResult<TimelineView> {
        let datasets = Self::datasets(&req.agents, &req.accent_palette);

        // bad zones are reported before anything is built
        for ds in &datasets {
            if let Err(e) = ds.agent.zone() {
                return Err(match ds.days.first() {
                    Some(day) => e.for_day(day.date),
                    None => e,
                });
            }
        }

        let merged = merge_agents(&datasets);

        for t in merged.days.iter().flat_map(|d| d.all_tickets()) {
            if !t.has_valid_priority() {
                tracing::warn!(ticket = t.id, priority = t.priority, "priority outside 1-4");
            }
        }

        let categories: BTreeSet<String> = merged
            .days
            .iter()
            .flat_map(|d| d.all_tickets())
            .filter_map(|t| t.category.clone())
            .collect();

        let mut filtered: Vec<FilteredDay> = filter::filter_days(&merged.days, &req.filter);

        match req.mode {
            ViewMode::SingleDay => {
                let day = req.period.first_date();
                filtered.retain(|d| d.date == day);
            }
            ViewMode::MultiDayRolling => pad_missing_days(&mut filtered, &req.period),
            ViewMode::MultiDayCombined => {}
        }

        let totals = filtered
            .iter()
            .fold(TimelineTotals::default(), |acc, d| TimelineTotals {
                picked_count: acc.picked_count + d.picked_count(),
                not_picked_count: acc.not_picked_count + d.not_picked_count(),
                hidden_by_filter_count: acc.hidden_by_filter_count + d.hidden,
            });

        let agents: Vec<_> = datasets.into_iter().map(|d| d.agent).collect();
        let mut items = assemble(&filtered, req.mode, &agents, req.display_tz)?;
        if req.collapse_markers {
            items = collapse::collapse_markers(items);
        }

        tracing::debug!(
            items = items.len(),
            picked = totals.picked_count,
            hidden = totals.hidden_by_filter_count,
            "timeline built"
        );

        Ok(TimelineView {
            mode: req.mode,
            items,
            totals,
            categories: categories.into_iter().collect(),
            conflicts: merged.conflicts,
        })
    }
}

/// Dates of the period the provider sent nothing for count as empty days.
fn pad_missing_days(days: &mut Vec<FilteredDay>, period: &Period) {
    if days.is_empty() {
        return;
    }

    let present: BTreeSet<_> = days.iter().map(|d| d.date).collect();
    for date in period.dates() {
        if present.contains(&date) {
            continue;
        }
        let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        days.push(FilteredDay {
            date,
            window_start: midnight,
            window_end: midnight,
            tickets: Vec::new(),
            hidden: 0,
        });
    }
    days.sort_by_key(|d| d.date);
}
