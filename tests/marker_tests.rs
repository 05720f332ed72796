use chrono::Duration;
use proptest::prelude::*;
use rticketline::core::calculator::markers::insert_markers;
use rticketline::core::calculator::timezone::parse_zone;
use rticketline::errors::AppError;
use rticketline::models::{AgentConfig, MarkerKind, TimelineItem};

mod common;
use common::{date, kinds, la_agent, ticket, ts};

#[test]
fn test_single_agent_scenario_order() {
    let tz = parse_zone("America/Los_Angeles").unwrap();
    let shifts = vec![la_agent().shift_for(date("2025-06-02")).unwrap()];

    // local 08:00, 10:30 and 18:30 in Los Angeles (PDT)
    let tickets = vec![
        ticket(1, "2025-06-02T15:00:00Z", true),
        ticket(2, "2025-06-02T17:30:00Z", true),
        ticket(3, "2025-06-03T01:30:00Z", false),
    ];

    let items = insert_markers(&tickets, &shifts, ts("2025-06-02T16:00:00Z"), tz);

    assert_eq!(
        kinds(&items),
        vec![
            "ticket:1",
            "agent_online",
            "hq_online",
            "ticket:2",
            "agent_offline",
            "ticket:3",
        ]
    );
}

#[test]
fn test_marker_labels_and_instants() {
    let tz = parse_zone("America/New_York").unwrap();
    let agent = la_agent().with_accent("#4f8cff");
    let shifts = vec![agent.shift_for(date("2025-06-02")).unwrap()];

    let items = insert_markers(&[], &shifts, ts("2025-06-02T16:00:00Z"), tz);
    let markers: Vec<_> = items.iter().filter_map(TimelineItem::as_marker).collect();

    assert_eq!(markers[0].label, "Ana online (Los Angeles 09:00)");
    assert_eq!(markers[0].accent.as_deref(), Some("#4f8cff"));
    assert_eq!(markers[0].agent_id.as_deref(), Some("a1"));
    assert_eq!(markers[1].label, "HQ online (12:00 EDT)");
    assert_eq!(markers[2].label, "Ana offline (Los Angeles 17:00)");
    assert_eq!(markers[2].at, ts("2025-06-03T00:00:00Z"));
}

#[test]
fn test_date_change_precedes_agent_markers() {
    let utc = parse_zone("UTC").unwrap();
    let shifts = vec![la_agent().shift_for(date("2025-06-02")).unwrap()];
    let tickets = vec![
        ticket(1, "2025-06-02T15:00:00Z", true),
        ticket(2, "2025-06-02T17:30:00Z", true),
        ticket(3, "2025-06-03T01:30:00Z", false),
    ];

    let items = insert_markers(&tickets, &shifts, ts("2025-06-02T16:00:00Z"), utc);

    assert_eq!(
        kinds(&items),
        vec![
            "ticket:1",
            "agent_online",
            "hq_online",
            "ticket:2",
            "date_change",
            "agent_offline",
            "ticket:3",
        ]
    );
    let change = items[4].as_marker().unwrap();
    assert_eq!(change.label, "Tue 2025-06-03");
    assert_eq!(change.at, ts("2025-06-03T00:00:00Z"));
}

#[test]
fn test_first_ticket_never_gets_date_change() {
    let utc = parse_zone("UTC").unwrap();
    let items = insert_markers(
        &[ticket(1, "2025-06-02T23:59:00Z", true)],
        &[],
        ts("2025-06-03T16:00:00Z"),
        utc,
    );
    assert_eq!(kinds(&items), vec!["ticket:1", "hq_online"]);
}

#[test]
fn test_untriggered_markers_appended_by_instant() {
    let tz = parse_zone("America/Los_Angeles").unwrap();
    let shifts = vec![la_agent().shift_for(date("2025-06-02")).unwrap()];

    // HQ at 13:00Z is before the agent's 16:00Z start
    let items = insert_markers(&[], &shifts, ts("2025-06-02T13:00:00Z"), tz);
    assert_eq!(kinds(&items), vec!["hq_online", "agent_online", "agent_offline"]);

    // one early ticket triggers nothing
    let items = insert_markers(
        &[ticket(7, "2025-06-02T10:00:00Z", false)],
        &shifts,
        ts("2025-06-02T13:00:00Z"),
        tz,
    );
    assert_eq!(
        kinds(&items),
        vec!["ticket:7", "hq_online", "agent_online", "agent_offline"]
    );
}

#[test]
fn test_several_agents_online_in_instant_order() {
    let tz = parse_zone("UTC").unwrap();
    let d = date("2025-06-02");
    let late = AgentConfig::new("b", "Bea", "12:00", "20:00", "UTC");
    let early = AgentConfig::new("a", "Al", "08:00", "16:00", "UTC");
    let shifts = vec![late.shift_for(d).unwrap(), early.shift_for(d).unwrap()];

    let items = insert_markers(
        &[ticket(1, "2025-06-02T13:00:00Z", true)],
        &shifts,
        ts("2025-06-02T09:00:00Z"),
        tz,
    );

    let labels: Vec<_> = items
        .iter()
        .filter_map(TimelineItem::as_marker)
        .map(|m| m.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Al online (UTC 08:00)",
            "Bea online (UTC 12:00)",
            "HQ online (09:00 UTC)",
            "Al offline (UTC 16:00)",
            "Bea offline (UTC 20:00)",
        ]
    );
    assert_eq!(items[3], TimelineItem::Ticket(ticket(1, "2025-06-02T13:00:00Z", true)));
}

#[test]
fn test_overnight_shift_ends_next_day() {
    let agent = AgentConfig::new("n", "Nia", "22:00", "06:00", "UTC");
    let shift = agent.shift_for(date("2025-06-02")).unwrap();
    assert_eq!(shift.start, ts("2025-06-02T22:00:00Z"));
    assert_eq!(shift.end, ts("2025-06-03T06:00:00Z"));
}

#[test]
fn test_malformed_shift_falls_back_to_default_window() {
    let agent = AgentConfig::new("m", "Mo", "9am", "17:00", "America/Los_Angeles");
    let shift = agent.shift_for(date("2025-06-02")).unwrap();
    assert_eq!(shift.local_start, "09:00");
    assert_eq!(shift.local_end, "17:00");
    assert_eq!(shift.start, ts("2025-06-02T16:00:00Z"));
    assert_eq!(shift.end, ts("2025-06-03T00:00:00Z"));
}

#[test]
fn test_unknown_zone_names_the_agent() {
    let agent = AgentConfig::new("z9", "Zed", "09:00", "17:00", "Nowhere/City");
    let err = agent.shift_for(date("2025-06-02")).unwrap_err();
    match err {
        AppError::InvalidTimeZone { zone, agent, date } => {
            assert_eq!(zone, "Nowhere/City");
            assert_eq!(agent.as_deref(), Some("z9"));
            assert_eq!(date, None);
        }
        other => panic!("expected InvalidTimeZone, got {other:?}"),
    }
}

const AGENT_ZONES: [&str; 4] = [
    "America/Los_Angeles",
    "Europe/Rome",
    "Asia/Kolkata",
    "America/New_York",
];

proptest! {
    #[test]
    fn each_boundary_marker_emitted_exactly_once(
        agent_count in 0usize..5,
        offsets in proptest::collection::vec(0i64..2880, 0..25),
    ) {
        let d = date("2025-06-02");
        let base = ts("2025-06-02T00:00:00Z");
        let tz = parse_zone("America/New_York").unwrap();

        let shifts: Vec<_> = (0..agent_count)
            .map(|i| {
                AgentConfig::new(&format!("a{i}"), "Agent", "09:00", "17:00", AGENT_ZONES[i % AGENT_ZONES.len()])
                    .shift_for(d)
                    .unwrap()
            })
            .collect();

        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        let tickets: Vec<_> = sorted
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let mut t = ticket(i as u64, "2025-06-02T00:00:00Z", i % 2 == 0);
                t.created_at = base + Duration::minutes(*m);
                t
            })
            .collect();

        let items = insert_markers(&tickets, &shifts, ts("2025-06-02T16:00:00Z"), tz);
        let count = |k: MarkerKind| items.iter().filter_map(TimelineItem::as_marker).filter(|m| m.kind == k).count();

        prop_assert_eq!(count(MarkerKind::AgentOnline), agent_count);
        prop_assert_eq!(count(MarkerKind::AgentOffline), agent_count);
        prop_assert_eq!(count(MarkerKind::HqOnline), 1);
        prop_assert_eq!(items.iter().filter(|i| i.as_ticket().is_some()).count(), tickets.len());
    }
}
