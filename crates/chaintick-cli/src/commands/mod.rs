mod add;
mod favorites;
mod history;
mod settings;

use std::path::PathBuf;
use std::sync::Arc;

use chaintick_core::{
    Envelope, EnvelopeError, EnvelopeMeta, FeedConfig, HistoryApiFeed, MockFeed, PriceFeed,
};
use chaintick_store::JsonKvStore;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a command hands back before envelope assembly.
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub latency_ms: u64,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            latency_ms: 0,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let kv = JsonKvStore::open(resolve_data_dir(cli.data_dir.clone()))?;

    let command_result = match &cli.command {
        Command::History(args) => history::run(args, build_feed(cli)?.as_ref()).await?,
        Command::Add(args) => add::run(args, build_feed(cli)?.as_ref()).await?,
        Command::Favorites(args) => {
            favorites::run(args, cli, kv).await?
        }
        Command::Settings(args) => settings::run(args, kv)?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
        latency_ms,
    } = command_result;

    let mut meta = EnvelopeMeta::new(latency_ms);
    for warning in warnings {
        meta.push_warning(warning);
    }

    Ok(Envelope::with_errors(meta, data, errors))
}

/// Build the feed a command will talk to: the live endpoint with injected
/// credentials, or the offline mock under `--mock`.
pub fn build_feed(cli: &Cli) -> Result<Arc<dyn PriceFeed>, CliError> {
    if cli.mock {
        return Ok(Arc::new(MockFeed::new()));
    }

    let config = FeedConfig::from_env()?;
    Ok(Arc::new(
        HistoryApiFeed::new(config).with_timeout_ms(cli.timeout_ms),
    ))
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("CHAINTICK_DATA_DIR").map(PathBuf::from))
        .or_else(|| dirs::data_local_dir().map(|dir| dir.join("chaintick")))
        .unwrap_or_else(|| PathBuf::from(".chaintick"))
}
