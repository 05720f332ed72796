//! Payload of the upstream timeline-data provider.
//!
//! The provider is queried with agent ids, a period and a display zone and
//! answers, per agent, with the shift configuration and the coverage days.
//! Here that answer is read from a JSON snapshot.

use super::agent::{AgentConfig, city_from_zone};
use super::coverage_day::CoverageDay;
use super::period::Period;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTimelineData {
    pub id: String,
    pub name: String,
    pub work_start_time: String,
    pub work_end_time: String,
    pub timezone: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub days: Vec<CoverageDay>,
}

impl AgentTimelineData {
    pub fn config(&self, accent: Option<&str>) -> AgentConfig {
        let mut cfg = AgentConfig::new(
            &self.id,
            &self.name,
            &self.work_start_time,
            &self.work_end_time,
            &self.timezone,
        );
        cfg.display_city = self
            .city
            .clone()
            .unwrap_or_else(|| city_from_zone(&self.timezone));
        cfg.accent = accent.map(str::to_string);
        cfg
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub display_timezone: Option<String>,
    #[serde(default)]
    pub agents: Vec<AgentTimelineData>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Agents in the requested order (all agents when `agent_ids` is empty),
    /// each restricted to the days inside `period`.
    pub fn fetch(&self, agent_ids: &[String], period: &Period) -> Vec<AgentTimelineData> {
        let selected: Vec<&AgentTimelineData> = if agent_ids.is_empty() {
            self.agents.iter().collect()
        } else {
            agent_ids
                .iter()
                .filter_map(|id| {
                    let found = self.agents.iter().find(|a| &a.id == id);
                    if found.is_none() {
                        tracing::warn!(agent = %id, "agent not present in snapshot, skipping");
                    }
                    found
                })
                .collect()
        };

        selected
            .into_iter()
            .map(|a| {
                let mut agent = a.clone();
                agent.days.retain(|d| period.contains(d.date));
                agent
            })
            .collect()
    }
}
