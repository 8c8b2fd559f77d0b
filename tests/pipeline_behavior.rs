//! Behavior-driven tests for the normalization and filtering pipeline.
//!
//! These tests verify HOW the system turns raw, mixed-format price
//! records into a sorted, windowed view: parsing equivalence, stable
//! ordering, inclusive boundaries, and tolerance of bad dates.

use chaintick_tests::{filter_by_range, record, sort_newest_first, window, CalendarDay, RangeWindow};

// =============================================================================
// Date Parsing: Format Equivalence
// =============================================================================

#[test]
fn when_the_same_day_is_spelled_both_ways_the_parser_agrees() {
    let cases = [
        ("01/05/2024", "2024-01-05"),
        ("12/31/2023", "2023-12-31"),
        ("02/29/2024", "2024-02-29"), // leap day
        ("10/01/2024", "2024-10-01"),
    ];

    for (us, iso) in cases {
        let a = CalendarDay::parse(us).expect("US spelling parses");
        let b = CalendarDay::parse(iso).expect("ISO spelling parses");
        assert_eq!(a, b, "{us} and {iso} must be the same day");
    }
}

#[test]
fn when_a_date_has_no_separators_parsing_fails_rather_than_defaults() {
    assert!(CalendarDay::parse("20240105").is_err());
    assert!(CalendarDay::parse("today").is_err());
    assert!(CalendarDay::parse("").is_err());
}

#[test]
fn when_a_date_carries_a_time_component_only_the_day_matters() {
    // Given: an RFC3339 instant late in the day
    let instant = CalendarDay::parse("2024-01-06T23:59:59Z").expect("instant parses");

    // Then: it equals the plain calendar day
    let day = CalendarDay::parse("2024-01-06").expect("day parses");
    assert_eq!(instant, day);
}

// =============================================================================
// Chronological Sorter
// =============================================================================

#[test]
fn when_records_are_sorted_newest_comes_first_across_spellings() {
    let sorted = sort_newest_first(vec![
        record("2024-01-03", 1.0),
        record("01/10/2024", 2.0),
        record("01/05/2024", 3.0),
    ]);

    let dates: Vec<&str> = sorted.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["01/10/2024", "01/05/2024", "2024-01-03"]);
}

#[test]
fn when_two_records_share_a_day_their_input_order_survives() {
    // Given: two spellings of the same day plus a newer record
    let sorted = sort_newest_first(vec![
        record("01/05/2024", 1.0),
        record("2024-01-05", 2.0),
        record("01/09/2024", 3.0),
    ]);

    // Then: the tie keeps input order behind the newer record
    assert_eq!(sorted[0].price, 3.0);
    assert_eq!(sorted[1].price, 1.0);
    assert_eq!(sorted[2].price, 2.0);
}

#[test]
fn when_a_record_date_is_garbage_the_sort_still_completes() {
    let sorted = sort_newest_first(vec![
        record("not-a-date", 1.0),
        record("2024-01-05", 2.0),
        record("", 3.0),
        record("01/07/2024", 4.0),
    ]);

    assert_eq!(sorted.len(), 4, "no record may be lost by sorting");
}

// =============================================================================
// Range Filter
// =============================================================================

#[test]
fn when_filtering_the_spec_example_exactly_the_in_window_records_remain() {
    // Given: the worked example from the filtering contract
    let records = vec![
        record("01/05/2024", 1.0),
        record("2024-01-03", 2.0),
        record("01/10/2024", 3.0),
    ];

    // When: filtering with start=2024-01-02, end=2024-01-06
    let filtered = filter_by_range(&records, window("2024-01-02", "2024-01-06"));

    // Then: only the first two records survive
    let dates: Vec<&str> = filtered.records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["01/05/2024", "2024-01-03"]);
}

#[test]
fn when_start_equals_end_the_window_selects_exactly_that_day() {
    let records = vec![
        record("2024-01-04", 1.0),
        record("01/05/2024", 2.0),
        record("2024-01-05", 3.0),
        record("2024-01-06", 4.0),
    ];

    let day = CalendarDay::parse("2024-01-05").expect("valid day");
    let filtered = filter_by_range(&records, RangeWindow::single_day(day));

    assert_eq!(filtered.records.len(), 2);
    assert!(filtered
        .records
        .iter()
        .all(|r| r.day().expect("parseable") == day));
}

#[test]
fn when_the_bounds_arrive_reversed_the_filter_swaps_them() {
    let records = vec![record("2024-01-05", 1.0)];

    let filtered = filter_by_range(&records, window("2024-01-06", "2024-01-02"));
    assert_eq!(filtered.records.len(), 1);
}

#[test]
fn when_filtering_twice_with_the_same_window_nothing_changes() {
    let records = vec![
        record("01/05/2024", 1.0),
        record("2024-01-03", 2.0),
        record("01/10/2024", 3.0),
        record("", 4.0),
    ];
    let w = window("2024-01-02", "2024-01-06");

    let once = filter_by_range(&records, w);
    let twice = filter_by_range(&once.records, w);

    assert_eq!(once.records, twice.records, "filtering must be idempotent");
}

#[test]
fn when_a_record_has_an_empty_date_it_is_excluded_not_fatal() {
    let records = vec![record("", 1.0), record("2024-01-05", 2.0)];

    let filtered = filter_by_range(&records, window("2024-01-01", "2024-01-31"));

    assert_eq!(filtered.records.len(), 1);
    assert_eq!(filtered.unparseable, 1);
}

#[test]
fn when_every_date_is_unusable_the_result_is_empty_and_counted() {
    let records = vec![record("", 1.0), record("???", 2.0)];

    let filtered = filter_by_range(&records, window("2024-01-01", "2024-01-31"));

    assert!(filtered.records.is_empty());
    assert_eq!(filtered.unparseable, 2);
}

// =============================================================================
// Pipeline: end to end
// =============================================================================

#[test]
fn when_the_full_pipeline_runs_output_is_sorted_windowed_and_tolerant() {
    // Given: a mixed-format history with one bad row
    let raw = vec![
        record("2024-01-03", 1.0),
        record("bogus", 0.0),
        record("01/10/2024", 2.0),
        record("01/05/2024", 3.0),
        record("2024-01-20", 4.0),
    ];

    // When: sort then filter, the way the view pipeline runs
    let sorted = sort_newest_first(raw);
    let filtered = filter_by_range(&sorted, window("2024-01-02", "2024-01-11"));

    // Then: in-window records, newest first, bad row counted out
    let dates: Vec<&str> = filtered.records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["01/10/2024", "01/05/2024", "2024-01-03"]);
    assert_eq!(filtered.unparseable, 1);
}
