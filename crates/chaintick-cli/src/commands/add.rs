use std::time::Instant;

use chaintick_core::{CalendarDay, EnvelopeError, NewPriceRecord, PriceFeed};
use serde_json::json;
use time::OffsetDateTime;

use crate::cli::AddArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(args: &AddArgs, feed: &dyn PriceFeed) -> Result<CommandResult, CliError> {
    let date = match &args.date {
        Some(raw) => raw.clone(),
        None => CalendarDay::from(OffsetDateTime::now_utc().date()).format_us(),
    };

    let record = NewPriceRecord::new(
        date,
        args.price,
        args.open,
        args.high,
        args.change,
        args.volume.clone(),
    )?;

    let started = Instant::now();
    match feed.submit(record).await {
        Ok(stored) => Ok(CommandResult::ok(json!({ "stored": stored }))
            .with_latency(started.elapsed().as_millis() as u64)),
        Err(error) => Ok(CommandResult::ok(json!({ "stored": null }))
            .with_error(EnvelopeError::from(&error))
            .with_latency(started.elapsed().as_millis() as u64)),
    }
}
