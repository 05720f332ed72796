//! Unions several agents' coverage days into one deduplicated dataset.

use crate::models::{AgentConfig, CoverageDay, TicketEvent};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// One agent's share of the raw provider data.
#[derive(Debug, Clone)]
pub struct AgentDataset {
    pub agent: AgentConfig,
    pub days: Vec<CoverageDay>,
}

/// Two selected agents both reported the same ticket as picked.
/// The first one (in selection order) keeps the attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipConflict {
    pub date: NaiveDate,
    pub ticket_id: u64,
    pub kept_agent: String,
    pub ignored_agent: String,
}

#[derive(Debug, Clone, Default)]
pub struct MergedDataset {
    pub days: Vec<CoverageDay>,
    pub conflicts: Vec<OwnershipConflict>,
}

impl MergedDataset {
    pub fn ticket_count(&self) -> usize {
        self.days.iter().map(CoverageDay::ticket_count).sum()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CoverageDay> {
        self.days.iter().find(|d| d.date == date)
    }
}

#[derive(Debug, Clone, Copy)]
enum Bucket {
    Coverage,
    Extended,
}

struct DayAccumulator {
    day: CoverageDay,
    slots: HashMap<u64, (Bucket, usize)>,
    owners: HashMap<u64, String>,
}

impl DayAccumulator {
    fn new(template: &CoverageDay) -> Self {
        Self {
            day: CoverageDay {
                date: template.date,
                window_start: template.window_start,
                window_end: template.window_end,
                coverage: Vec::new(),
                extended: Vec::new(),
            },
            slots: HashMap::new(),
            owners: HashMap::new(),
        }
    }

    fn slot_mut(&mut self, bucket: Bucket, idx: usize) -> &mut TicketEvent {
        match bucket {
            Bucket::Coverage => &mut self.day.coverage[idx],
            Bucket::Extended => &mut self.day.extended[idx],
        }
    }

    fn absorb(
        &mut self,
        bucket: Bucket,
        ticket: &TicketEvent,
        agent: &AgentConfig,
        conflicts: &mut Vec<OwnershipConflict>,
    ) {
        let Some(&(b, idx)) = self.slots.get(&ticket.id) else {
            let mut fresh = ticket.clone();
            fresh.owner_first_name = None;
            fresh.owner_accent = None;
            if fresh.picked_by_tech {
                attribute(&mut fresh, agent);
                self.owners.insert(ticket.id, agent.id.clone());
            }

            let list = match bucket {
                Bucket::Coverage => &mut self.day.coverage,
                Bucket::Extended => &mut self.day.extended,
            };
            list.push(fresh);
            self.slots.insert(ticket.id, (bucket, list.len() - 1));
            return;
        };

        if !ticket.picked_by_tech {
            return;
        }

        match self.owners.get(&ticket.id) {
            None => {
                attribute(self.slot_mut(b, idx), agent);
                self.owners.insert(ticket.id, agent.id.clone());
            }
            Some(owner) if *owner != agent.id => {
                tracing::warn!(
                    date = %self.day.date,
                    ticket = ticket.id,
                    kept = %owner,
                    ignored = %agent.id,
                    "ticket picked by more than one agent, keeping first owner"
                );
                conflicts.push(OwnershipConflict {
                    date: self.day.date,
                    ticket_id: ticket.id,
                    kept_agent: owner.clone(),
                    ignored_agent: agent.id.clone(),
                });
            }
            Some(_) => {}
        }
    }
}

fn attribute(ticket: &mut TicketEvent, agent: &AgentConfig) {
    ticket.picked_by_tech = true;
    ticket.owner_first_name = Some(agent.first_name.clone());
    ticket.owner_accent = agent.accent.clone();
}

/// Merge per-agent datasets keyed by date.
///
/// Each ticket id appears once per day. A ticket is picked when any agent
/// picked it; the first picking agent in `datasets` order is its owner.
/// Tickets nobody picked stay as unattributed context.
pub fn merge_agents(datasets: &[AgentDataset]) -> MergedDataset {
    let mut by_date: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
    let mut conflicts = Vec::new();

    for dataset in datasets {
        for day in &dataset.days {
            let acc = by_date
                .entry(day.date)
                .or_insert_with(|| DayAccumulator::new(day));

            for t in &day.coverage {
                acc.absorb(Bucket::Coverage, t, &dataset.agent, &mut conflicts);
            }
            for t in &day.extended {
                acc.absorb(Bucket::Extended, t, &dataset.agent, &mut conflicts);
            }
        }
    }

    let days: Vec<CoverageDay> = by_date.into_values().map(|acc| acc.day).collect();

    tracing::debug!(
        agents = datasets.len(),
        days = days.len(),
        conflicts = conflicts.len(),
        "merged agent datasets"
    );

    MergedDataset { days, conflicts }
}
