//! Include/exclude filtering of tickets.
//!
//! The rules are asymmetric: exclude rules only hide background tickets.
//! A ticket some selected agent picked can be hidden by include rules but
//! never by an exclude rule.

use crate::models::filter::keyword_terms;
use crate::models::{CoverageDay, FilterState, FilteredDay, TicketEvent};

/// Pre-split view of a `FilterState`, built once per timeline build.
#[derive(Debug, Clone)]
pub struct CompiledFilter<'a> {
    state: &'a FilterState,
    exclude_terms: Vec<String>,
    include_terms: Vec<String>,
}

impl<'a> CompiledFilter<'a> {
    pub fn new(state: &'a FilterState) -> Self {
        Self {
            state,
            exclude_terms: keyword_terms(&state.exclude_keyword_terms),
            include_terms: keyword_terms(&state.include_keyword_terms),
        }
    }

    pub fn is_visible(&self, ticket: &TicketEvent) -> bool {
        let state = self.state;

        if !ticket.picked_by_tech {
            if category_in(ticket, &state.exclude_categories) {
                return false;
            }
            if any_term_matches(&ticket.subject, &self.exclude_terms) {
                return false;
            }
        }

        if !state.include_categories.is_empty() && !category_in(ticket, &state.include_categories)
        {
            return false;
        }

        if !self.include_terms.is_empty() && !any_term_matches(&ticket.subject, &self.include_terms)
        {
            return false;
        }

        true
    }

    /// Visible tickets of `day`, sorted by (created_at, id), plus the number
    /// of tickets the filter hid.
    pub fn apply(&self, day: &CoverageDay) -> FilteredDay {
        let all = day.sorted_tickets();
        let total = all.len();
        let tickets: Vec<TicketEvent> = all.into_iter().filter(|t| self.is_visible(t)).collect();

        FilteredDay {
            date: day.date,
            window_start: day.window_start,
            window_end: day.window_end,
            hidden: total - tickets.len(),
            tickets,
        }
    }
}

fn category_in(ticket: &TicketEvent, set: &std::collections::BTreeSet<String>) -> bool {
    ticket.category.as_ref().is_some_and(|c| set.contains(c))
}

fn any_term_matches(subject: &str, terms: &[String]) -> bool {
    let subject = subject.to_lowercase();
    terms.iter().any(|t| subject.contains(t.as_str()))
}

/// Single-ticket convenience wrapper.
pub fn is_visible(ticket: &TicketEvent, state: &FilterState) -> bool {
    CompiledFilter::new(state).is_visible(ticket)
}

pub fn filter_days(days: &[CoverageDay], state: &FilterState) -> Vec<FilteredDay> {
    let compiled = CompiledFilter::new(state);
    days.iter().map(|d| compiled.apply(d)).collect()
}
