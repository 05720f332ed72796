use rticketline::core::calculator::filter::{CompiledFilter, filter_days, is_visible};
use rticketline::models::FilterState;
use rticketline::models::filter::keyword_terms;

mod common;
use common::{categorized, day, ticket};

#[test]
fn test_empty_filter_shows_everything() {
    let state = FilterState::default();
    assert!(state.is_empty());
    assert!(is_visible(&categorized(1, "Spam", "anything", false), &state));
    assert!(is_visible(&categorized(2, "Spam", "anything", true), &state));
}

#[test]
fn test_exclude_category_never_hides_picked_ticket() {
    let state = FilterState::default().exclude_category("Spam");

    assert!(!is_visible(&categorized(1, "Spam", "Win a prize", false), &state));
    assert!(is_visible(&categorized(2, "Spam", "Win a prize", true), &state));
}

#[test]
fn test_exclude_keywords_never_hide_picked_ticket() {
    let state = FilterState::default().exclude_keywords("password reset|PRINTER");

    assert!(!is_visible(&categorized(1, "IT", "Printer jammed again", false), &state));
    assert!(!is_visible(&categorized(2, "IT", "Need a Password Reset", false), &state));
    assert!(is_visible(&categorized(3, "IT", "Printer jammed again", true), &state));
    assert!(is_visible(&categorized(4, "IT", "VPN down", false), &state));
}

#[test]
fn test_include_category_hides_picked_ticket_outside_set() {
    let state = FilterState::default().include_category("Billing");

    assert!(!is_visible(&categorized(1, "Network", "VPN down", true), &state));
    assert!(is_visible(&categorized(2, "Billing", "Refund", true), &state));
    assert!(!is_visible(&categorized(3, "Network", "VPN down", false), &state));
    assert!(is_visible(&categorized(4, "Billing", "Refund", false), &state));
}

#[test]
fn test_uncategorized_ticket_fails_include_but_passes_exclude() {
    let uncategorized = ticket(1, "2025-06-02T10:00:00Z", false);

    let include = FilterState::default().include_category("Billing");
    assert!(!is_visible(&uncategorized, &include));

    let exclude = FilterState::default().exclude_category("Billing");
    assert!(is_visible(&uncategorized, &exclude));
}

#[test]
fn test_include_keywords_apply_to_both_kinds() {
    let state = FilterState::default().include_keywords("refund | chargeback");

    assert!(is_visible(&categorized(1, "Billing", "REFUND please", true), &state));
    assert!(is_visible(&categorized(2, "Billing", "Chargeback notice", false), &state));
    assert!(!is_visible(&categorized(3, "Billing", "Invoice copy", true), &state));
    assert!(!is_visible(&categorized(4, "Billing", "Invoice copy", false), &state));
}

#[test]
fn test_exclude_checked_before_include_for_context() {
    let state = FilterState::default()
        .exclude_category("Spam")
        .include_keywords("prize");

    // matches the include term but is excluded first
    assert!(!is_visible(&categorized(1, "Spam", "prize inside", false), &state));
    // picked: exclude skipped, include satisfied
    assert!(is_visible(&categorized(2, "Spam", "prize inside", true), &state));
    // picked: exclude skipped, include not satisfied
    assert!(!is_visible(&categorized(3, "Spam", "hello", true), &state));
}

#[test]
fn test_keyword_terms_split_trim_and_drop_empty() {
    assert_eq!(keyword_terms(" Foo || bar |BAZ "), vec!["foo", "bar", "baz"]);
    assert!(keyword_terms("|  |").is_empty());
    assert!(FilterState::default().exclude_keywords(" | ").is_empty());
}

#[test]
fn test_apply_sorts_and_counts_hidden() {
    let mut d = day(
        "2025-06-02",
        "2025-06-02T16:00:00Z",
        vec![
            ticket(3, "2025-06-02T12:00:00Z", false),
            ticket(1, "2025-06-02T09:00:00Z", true),
        ],
    );
    d.extended.push(ticket(2, "2025-06-02T10:00:00Z", false));
    d.coverage[0].category = Some("Spam".into());

    let state = FilterState::default().exclude_category("Spam");
    let filtered = CompiledFilter::new(&state).apply(&d);

    let ids: Vec<_> = filtered.tickets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(filtered.hidden, 1);
    assert_eq!(filtered.picked_count(), 1);
    assert_eq!(filtered.not_picked_count(), 1);

    let all = filter_days(&[d], &FilterState::default());
    assert_eq!(all[0].tickets.len(), 3);
    assert_eq!(all[0].hidden, 0);
}
