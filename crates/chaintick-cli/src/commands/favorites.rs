use std::time::Instant;

use chaintick_core::{CalendarDay, EnvelopeError};
use chaintick_store::{FavoritesStore, JsonKvStore};
use serde_json::json;

use crate::cli::{Cli, FavoritesArgs, FavoritesCommand};
use crate::error::CliError;

use super::{build_feed, CommandResult};

pub async fn run(
    args: &FavoritesArgs,
    cli: &Cli,
    kv: JsonKvStore,
) -> Result<CommandResult, CliError> {
    let store = FavoritesStore::new(kv);

    match &args.command {
        FavoritesCommand::List => {
            if store.take_cleared()? {
                return Ok(CommandResult::ok(json!({ "count": 0, "records": [] }))
                    .with_warning("favorites were cleared since the last view"));
            }

            let records = store.load();
            Ok(CommandResult::ok(json!({
                "count": records.len(),
                "records": records,
            })))
        }

        FavoritesCommand::Add(date_args) => {
            let day = CalendarDay::parse(&date_args.date)?;
            let feed = build_feed(cli)?;
            let started = Instant::now();

            let history = match feed.fetch_history().await {
                Ok(history) => history,
                Err(error) => {
                    return Ok(CommandResult::ok(json!({ "added": false }))
                        .with_error(EnvelopeError::from(&error))
                        .with_latency(started.elapsed().as_millis() as u64));
                }
            };

            let record = history
                .iter()
                .find(|record| record.day().map(|d| d == day).unwrap_or(false))
                .ok_or_else(|| {
                    CliError::Command(format!("no history record for date '{}'", date_args.date))
                })?;

            let added = store.add(record)?;
            let mut result = CommandResult::ok(json!({ "added": added, "record": record }))
                .with_latency(started.elapsed().as_millis() as u64);
            if !added {
                result = result.with_warning(format!("'{}' is already a favorite", record.date));
            }
            Ok(result)
        }

        FavoritesCommand::Remove(date_args) => {
            CalendarDay::parse(&date_args.date)?;
            let removed = store.remove(&date_args.date)?;
            let mut result = CommandResult::ok(json!({ "removed": removed }));
            if !removed {
                result =
                    result.with_warning(format!("no favorite found for '{}'", date_args.date));
            }
            Ok(result)
        }

        FavoritesCommand::Clear => {
            store.clear()?;
            Ok(CommandResult::ok(json!({ "cleared": true })))
        }
    }
}
