//! Price record ordering and date-range filtering.
//!
//! The pipeline is `raw records → parsed dates → sorted → filtered by the
//! active window`. Every step is a pure, synchronous transformation over
//! in-memory collections; a record whose date will not parse degrades that
//! one record (skipped or left in place), never the whole pass.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::{CalendarDay, PriceRecord};

/// Inclusive `[start, end]` day window used to filter displayed records.
///
/// The window always covers the entire start day through the entire end
/// day. Construction swaps reversed bounds rather than erroring, so a
/// caller can hand over two pickers' worth of input unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeWindow {
    pub start: CalendarDay,
    pub end: CalendarDay,
}

impl RangeWindow {
    pub fn new(start: CalendarDay, end: CalendarDay) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn single_day(day: CalendarDay) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Result of a range-filter pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredHistory {
    /// Records inside the window, input order preserved.
    pub records: Vec<PriceRecord>,
    /// How many records were dropped because their date was missing,
    /// empty, or failed to parse.
    pub unparseable: usize,
}

/// Order records by parsed date, newest first.
///
/// The sort is stable: records with equal dates keep their input order.
/// A record whose date fails to parse compares equal to every partner —
/// it is logged and left where the stable sort puts it, and must never
/// abort the pass.
pub fn sort_newest_first(records: Vec<PriceRecord>) -> Vec<PriceRecord> {
    let mut keyed: Vec<(Option<CalendarDay>, PriceRecord)> = records
        .into_iter()
        .map(|record| {
            let day = match record.day() {
                Ok(day) => Some(day),
                Err(error) => {
                    debug!(date = %record.date, %error, "unsortable record date, leaving in place");
                    None
                }
            };
            (day, record)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        _ => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Keep the records whose calendar day falls inside `window`.
///
/// Comparison happens at whole-day granularity: the parsed record date
/// carries no sub-day component, so an instant-spelled date can never
/// slip past a midnight boundary. Records with a missing or unparseable
/// date are excluded and counted, not errors for the operation.
pub fn filter_by_range(records: &[PriceRecord], window: RangeWindow) -> FilteredHistory {
    let mut kept = Vec::with_capacity(records.len());
    let mut unparseable = 0;

    for record in records {
        match record.day() {
            Ok(day) => {
                if window.contains(day) {
                    kept.push(record.clone());
                }
            }
            Err(error) => {
                debug!(date = %record.date, %error, "excluding record with unusable date");
                unparseable += 1;
            }
        }
    }

    FilteredHistory {
        records: kept,
        unparseable,
    }
}
