#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, Utc};
use rticketline::models::{AgentConfig, CoverageDay, TicketEvent, TicketStatus, TimelineItem};
use std::fs;
use std::path::{Path, PathBuf};

pub fn rti() -> Command {
    cargo_bin_cmd!("rticketline")
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid rfc3339 timestamp")
        .with_timezone(&Utc)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn ticket(id: u64, created_at: &str, picked: bool) -> TicketEvent {
    TicketEvent {
        id,
        created_at: ts(created_at),
        first_assigned_at: None,
        closed_at: None,
        category: None,
        subject: format!("Ticket {id}"),
        priority: 2,
        status: TicketStatus::Open,
        assigned_tech_id: None,
        picked_by_tech: picked,
        owner_first_name: None,
        owner_accent: None,
    }
}

pub fn categorized(id: u64, category: &str, subject: &str, picked: bool) -> TicketEvent {
    TicketEvent {
        category: Some(category.to_string()),
        subject: subject.to_string(),
        ..ticket(id, "2025-06-02T15:00:00Z", picked)
    }
}

pub fn day(date_str: &str, window_end: &str, coverage: Vec<TicketEvent>) -> CoverageDay {
    CoverageDay {
        date: date(date_str),
        window_start: ts(&format!("{date_str}T00:00:00Z")),
        window_end: ts(window_end),
        coverage,
        extended: Vec::new(),
    }
}

pub fn la_agent() -> AgentConfig {
    AgentConfig::new("a1", "Ana Lopez", "09:00", "17:00", "America/Los_Angeles")
}

/// Kinds of the rendered items, markers by marker kind.
pub fn kinds(items: &[TimelineItem]) -> Vec<String> {
    items
        .iter()
        .map(|i| match i {
            TimelineItem::Ticket(t) => format!("ticket:{}", t.id),
            TimelineItem::Marker(m) => m.kind.as_str().to_string(),
            TimelineItem::DayHeader { date, .. } => format!("header:{date}"),
            TimelineItem::EmptyGap { count, .. } => format!("gap:{count}"),
            TimelineItem::MergedMarkerGroup { markers } => format!("group:{}", markers.len()),
        })
        .collect()
}

/// Two agents over 2025-06-02 and 2025-06-03 plus an idle stretch until
/// 2025-06-09, as the provider would send it.
pub const SNAPSHOT_JSON: &str = r#"{
  "display_timezone": "America/Los_Angeles",
  "agents": [
    {
      "id": "a1",
      "name": "Ana Lopez",
      "work_start_time": "09:00",
      "work_end_time": "17:00",
      "timezone": "America/Los_Angeles",
      "days": [
        {
          "date": "2025-06-02",
          "window_start": "2025-06-02T07:00:00Z",
          "window_end": "2025-06-02T16:00:00Z",
          "coverage": [
            { "id": 101, "created_at": "2025-06-02T15:00:00Z", "category": "Billing",
              "subject": "Refund request for invoice 42", "priority": 3, "status": "Open",
              "picked_by_tech": true },
            { "id": 102, "created_at": "2025-06-02T17:30:00Z", "category": "Spam",
              "subject": "You won a prize", "priority": 1, "status": "Closed",
              "picked_by_tech": false }
          ],
          "extended": [
            { "id": 103, "created_at": "2025-06-03T01:30:00Z", "category": "Network",
              "subject": "VPN down in branch office", "priority": 4, "status": "Pending",
              "picked_by_tech": true }
          ]
        },
        {
          "date": "2025-06-09",
          "window_start": "2025-06-09T07:00:00Z",
          "window_end": "2025-06-09T16:00:00Z",
          "coverage": [
            { "id": 201, "created_at": "2025-06-09T18:00:00Z", "category": "Billing",
              "subject": "Duplicate charge", "priority": 2, "status": "Resolved",
              "picked_by_tech": true }
          ]
        }
      ]
    },
    {
      "id": "b2",
      "name": "Bruno Rossi",
      "work_start_time": "08:00",
      "work_end_time": "16:00",
      "timezone": "Europe/Rome",
      "city": "Milan",
      "days": [
        {
          "date": "2025-06-02",
          "window_start": "2025-06-02T07:00:00Z",
          "window_end": "2025-06-02T16:00:00Z",
          "coverage": [
            { "id": 101, "created_at": "2025-06-02T15:00:00Z", "category": "Billing",
              "subject": "Refund request for invoice 42", "priority": 3, "status": "Open",
              "picked_by_tech": false },
            { "id": 150, "created_at": "2025-06-02T08:15:00Z", "category": "Hardware",
              "subject": "Laptop battery swelling", "priority": 3, "status": "Open",
              "picked_by_tech": true }
          ]
        }
      ]
    }
  ]
}"#;

pub fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("snapshot.json");
    fs::write(&path, SNAPSHOT_JSON).expect("write snapshot");
    path
}
