//! # Chaintick Core
//!
//! Core contracts and domain types for the chaintick Bitcoin price-history
//! toolkit.
//!
//! ## Overview
//!
//! This crate provides the foundational components for chaintick:
//!
//! - **Domain models** for price records and calendar days
//! - **The normalization pipeline**: date parsing, chronological sorting,
//!   inclusive day-range filtering
//! - **Feed contract** for reading and appending price history
//! - **HTTP transport abstraction** with a retrying REST adapter
//! - **Response envelope** for machine-readable CLI output
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Feed adapters (history REST endpoint, offline mock) |
//! | [`config`] | Feed credentials and the presentation palette |
//! | [`domain`] | Domain models ([`PriceRecord`], [`CalendarDay`]) |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`feed`] | Feed trait and structured feed errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`pipeline`] | Sorting and range filtering |
//! | [`retry`] | Backoff and retry policy |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chaintick_core::{
//!     filter_by_range, sort_newest_first, CalendarDay, FeedConfig, HistoryApiFeed, PriceFeed,
//!     RangeWindow,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let feed = HistoryApiFeed::new(FeedConfig::from_env()?);
//!     let history = sort_newest_first(feed.fetch_history().await?);
//!
//!     let window = RangeWindow::new(
//!         CalendarDay::parse("2024-01-02")?,
//!         CalendarDay::parse("2024-01-06")?,
//!     );
//!     let filtered = filter_by_range(&history, window);
//!
//!     println!("{} records in range", filtered.records.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Per-record problems degrade the record, not the operation: a date that
//! fails to parse drops out of filter results and sorts as equal. Feed
//! and validation failures are structured errors callers can match on.
//!
//! ## Security
//!
//! The API token is read from the environment or injected by the caller;
//! it is never hardcoded, logged, or echoed in `Debug` output.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod feed;
pub mod http_client;
pub mod pipeline;
pub mod retry;

// Re-export commonly used types at crate root for convenience

pub use adapters::{HistoryApiFeed, MockFeed};
pub use config::{FeedConfig, Theme, DEFAULT_BASE_URL};
pub use domain::{CalendarDay, NewPriceRecord, PriceRecord};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::ValidationError;
pub use feed::{FeedError, FeedErrorKind, PriceFeed};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
pub use pipeline::{filter_by_range, sort_newest_first, FilteredHistory, RangeWindow};
pub use retry::{Backoff, RetryConfig};
