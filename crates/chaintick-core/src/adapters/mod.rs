//! Feed adapters: the live REST endpoint and the offline mock.

mod history_api;
mod mock;

pub use history_api::HistoryApiFeed;
pub use mock::MockFeed;
