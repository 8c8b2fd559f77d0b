//! Deterministic offline feed for demos and tests.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use time::{Duration, OffsetDateTime};

use crate::feed::{FeedError, PriceFeed};
use crate::{CalendarDay, NewPriceRecord, PriceRecord};

/// In-memory feed seeded with a recent month of synthetic observations.
///
/// Dates alternate between the two wire spellings so downstream code is
/// exercised against the mixed-format reality of the live endpoint.
/// Submitted records are appended and handed back with a mock identifier.
pub struct MockFeed {
    records: Mutex<Vec<PriceRecord>>,
}

impl MockFeed {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(sample_history()),
        }
    }

    pub fn with_records(records: Vec<PriceRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceFeed for MockFeed {
    fn fetch_history<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PriceRecord>, FeedError>> + Send + 'a>> {
        let snapshot = self.records.lock().expect("mock feed poisoned").clone();
        Box::pin(async move { Ok(snapshot) })
    }

    fn submit<'a>(
        &'a self,
        record: NewPriceRecord,
    ) -> Pin<Box<dyn Future<Output = Result<PriceRecord, FeedError>> + Send + 'a>> {
        let stored = PriceRecord {
            date: record.date,
            price: record.price,
            open: record.open,
            high: record.high,
            change_percent: record.change_percent,
            volume: record.volume,
            id: Some(format!("mock-{}", uuid::Uuid::new_v4())),
        };
        self.records
            .lock()
            .expect("mock feed poisoned")
            .insert(0, stored.clone());
        Box::pin(async move { Ok(stored) })
    }
}

/// Thirty synthetic daily observations ending today, newest last so the
/// sorter has work to do.
fn sample_history() -> Vec<PriceRecord> {
    let today = OffsetDateTime::now_utc().date();
    (0..30)
        .rev()
        .map(|age| {
            let day = CalendarDay::from(today - Duration::days(age));
            let wobble = ((age * 37) % 11) as f64;
            let price = 42_000.0 + wobble * 250.0;
            PriceRecord {
                date: if age % 2 == 0 {
                    day.format_us()
                } else {
                    day.format_iso()
                },
                price,
                open: price - 120.0,
                high: price + 310.0,
                change_percent: wobble - 5.0,
                volume: format!("{:.2}K", 400.0 + wobble * 12.5),
                id: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_a_month_of_mixed_spellings() {
        let feed = MockFeed::new();
        let history = feed.fetch_history().await.expect("must fetch");

        assert_eq!(history.len(), 30);
        assert!(history.iter().any(|r| r.date.contains('/')));
        assert!(history.iter().any(|r| r.date.contains('-')));
        assert!(history.iter().all(|r| r.day().is_ok()));
    }

    #[tokio::test]
    async fn submit_appends_and_assigns_an_id() {
        let feed = MockFeed::with_records(Vec::new());
        let record =
            NewPriceRecord::new("01/05/2024", 42_000.0, None, None, None, None).expect("valid");

        let stored = feed.submit(record).await.expect("must store");
        assert!(stored.id.as_deref().unwrap_or_default().starts_with("mock-"));

        let history = feed.fetch_history().await.expect("must fetch");
        assert_eq!(history.len(), 1);
    }
}
