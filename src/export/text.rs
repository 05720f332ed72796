//! Human-readable rendering of a timeline view for the terminal.

use crate::core::TimelineView;
use crate::core::calculator::timeline::ViewMode;
use crate::models::{Marker, TicketEvent, TimelineItem};
use crate::utils::colors::{dim, paint_accent, priority_colour};
use crate::utils::formatting::{bold, italic, pad_right, priority_tag};
use crate::utils::{date, pluralize};
use chrono_tz::Tz;

const SUBJECT_WIDTH: usize = 56;
const SUBJECT_INDENT: usize = 48;

pub struct TextStyle {
    pub color: bool,
    pub tz: Tz,
}

impl TextStyle {
    fn paint_marker(&self, m: &Marker) -> String {
        if self.color {
            paint_accent(&m.label, m.accent.as_deref())
        } else {
            m.label.clone()
        }
    }

    fn bold(&self, s: &str) -> String {
        if self.color { bold(s) } else { s.to_string() }
    }

    fn italic(&self, s: &str) -> String {
        if self.color { italic(s) } else { s.to_string() }
    }
}

fn ticket_line(t: &TicketEvent, mode: ViewMode, style: &TextStyle) -> String {
    let local = t.created_at.with_timezone(&style.tz);
    let when = match mode {
        ViewMode::MultiDayCombined => local.format("%H:%M (%m-%d)").to_string(),
        _ => local.format("%H:%M").to_string(),
    };

    let prio = pad_right(priority_tag(t.priority), 9);
    let prio = if style.color {
        priority_colour(t.priority).paint(prio).to_string()
    } else {
        prio
    };

    let head = format!(
        "  {} #{} {} {} {} ",
        pad_right(&when, 13),
        pad_right(&t.id.to_string(), 7),
        prio,
        pad_right(t.status.as_str(), 8),
        pad_right(t.category_str(), 14),
    );

    let wrapped = textwrap::wrap(&t.subject, SUBJECT_WIDTH);
    let mut subject = wrapped
        .iter()
        .enumerate()
        .map(|(i, l)| {
            if i == 0 {
                l.to_string()
            } else {
                format!("\n{}{}", " ".repeat(SUBJECT_INDENT), l)
            }
        })
        .collect::<String>();

    if let Some(owner) = &t.owner_first_name {
        let tag = format!("  [{owner}]");
        subject.push_str(&if style.color {
            paint_accent(&tag, t.owner_accent.as_deref())
        } else {
            tag
        });
    }

    let line = format!("{head}{subject}");
    if t.picked_by_tech || !style.color {
        line
    } else {
        dim(&line)
    }
}

fn render_item(item: &TimelineItem, mode: ViewMode, style: &TextStyle) -> String {
    match item {
        TimelineItem::Ticket(t) => ticket_line(t, mode, style),
        TimelineItem::Marker(m) => format!("  ── {} ──", style.paint_marker(m)),
        TimelineItem::MergedMarkerGroup { markers } => {
            let labels: Vec<String> = markers.iter().map(|m| style.paint_marker(m)).collect();
            format!("  ── {} ──", labels.join(" · "))
        }
        TimelineItem::DayHeader {
            date: d,
            picked_count,
            not_picked_count,
            total,
        } => style.bold(&format!(
            "\n=== {} {} | picked {} | context {} | total {} ===",
            date::weekday_short(*d),
            date::format_date(*d),
            picked_count,
            not_picked_count,
            total
        )),
        TimelineItem::EmptyGap {
            start_date,
            end_date,
            count,
        } => {
            let span = if start_date == end_date {
                date::format_date(*start_date)
            } else {
                format!(
                    "{} → {}",
                    date::format_date(*start_date),
                    date::format_date(*end_date)
                )
            };
            style.italic(&format!(
                "\n  … no activity for {} ({span})",
                pluralize(*count, "day", "days")
            ))
        }
    }
}

pub fn render(view: &TimelineView, style: &TextStyle) -> String {
    if view.is_empty() {
        return "No activity for the selected period.\n".to_string();
    }

    let mut out = String::new();
    for item in &view.items {
        out.push_str(&render_item(item, view.mode, style));
        out.push('\n');
    }

    out.push_str(&format!(
        "\nPicked: {} | Context: {} | Hidden by filter: {}\n",
        view.totals.picked_count, view.totals.not_picked_count, view.totals.hidden_by_filter_count
    ));

    out
}
