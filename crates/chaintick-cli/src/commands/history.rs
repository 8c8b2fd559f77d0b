use std::time::Instant;

use chaintick_core::{
    filter_by_range, sort_newest_first, CalendarDay, EnvelopeError, PriceFeed, RangeWindow,
};
use serde_json::json;
use time::{Duration, OffsetDateTime};

use crate::cli::HistoryArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(args: &HistoryArgs, feed: &dyn PriceFeed) -> Result<CommandResult, CliError> {
    let window = resolve_window(args)?;
    let started = Instant::now();

    match feed.fetch_history().await {
        Ok(records) => {
            let sorted = sort_newest_first(records);
            let filtered = filter_by_range(&sorted, window);
            let latency_ms = started.elapsed().as_millis() as u64;

            let mut result = CommandResult::ok(json!({
                "window": window,
                "count": filtered.records.len(),
                "records": filtered.records,
            }))
            .with_latency(latency_ms);

            if filtered.unparseable > 0 {
                result = result.with_warning(format!(
                    "{} record(s) excluded: date missing or unparseable",
                    filtered.unparseable
                ));
            }

            Ok(result)
        }
        Err(error) => Ok(CommandResult::ok(json!({
            "window": window,
            "count": 0,
            "records": [],
        }))
        .with_error(EnvelopeError::from(&error))
        .with_latency(started.elapsed().as_millis() as u64)),
    }
}

/// Default window matches the original app: the 30 days ending today.
fn resolve_window(args: &HistoryArgs) -> Result<RangeWindow, CliError> {
    let today = CalendarDay::from(OffsetDateTime::now_utc().date());

    let end = match &args.to {
        Some(raw) => CalendarDay::parse(raw)?,
        None => today,
    };
    let start = match &args.from {
        Some(raw) => CalendarDay::parse(raw)?,
        None => CalendarDay::from(end.into_inner() - Duration::days(30)),
    };

    Ok(RangeWindow::new(start, end))
}
