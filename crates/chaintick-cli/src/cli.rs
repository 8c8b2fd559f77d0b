//! CLI argument definitions for chaintick.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `history` | Fetch price history, sorted and filtered by date window |
//! | `add` | Append a new price record through the retrying write path |
//! | `favorites` | Manage the local favorites collection |
//! | `settings` | Show or change persisted settings |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `3000` | Request timeout in ms |
//! | `--mock` | `false` | Offline deterministic feed |
//! | `--data-dir` | platform dir | Local state directory |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Bitcoin price-history CLI.
///
/// Browse historical prices, filter by date range, append new records,
/// and keep a local favorites list. Dates are accepted as `MM/DD/YYYY`
/// or `YYYY-MM-DD` interchangeably.
#[derive(Debug, Parser)]
#[command(
    name = "chaintick",
    author,
    version,
    about = "Bitcoin price-history CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Use the deterministic offline feed instead of the live endpoint.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    /// Directory for local state (favorites, settings).
    ///
    /// Defaults to `$CHAINTICK_DATA_DIR`, then the platform data dir.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for terminal display.
    Table,
    /// Single JSON envelope.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch price history, newest first, filtered by a date window.
    ///
    /// # Examples
    ///
    ///   chaintick history
    ///   chaintick history --from 01/01/2024 --to 2024-01-31
    History(HistoryArgs),

    /// Append one price record through the retrying write path.
    ///
    /// # Examples
    ///
    ///   chaintick add --price 42750.50
    ///   chaintick add --date 2024-01-05 --price 42750.50 --volume 500.00K
    Add(AddArgs),

    /// Manage the local favorites collection.
    Favorites(FavoritesArgs),

    /// Show or change persisted settings.
    Settings(SettingsArgs),
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Window start date. Defaults to 30 days before the end.
    #[arg(long)]
    pub from: Option<String>,

    /// Window end date. Defaults to today.
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the `add` command.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Observation date. Defaults to today.
    #[arg(long)]
    pub date: Option<String>,

    /// Closing/spot price (required).
    #[arg(long)]
    pub price: f64,

    /// Opening price. Defaults to 0.
    #[arg(long)]
    pub open: Option<f64>,

    /// Daily high. Defaults to 0.
    #[arg(long)]
    pub high: Option<f64>,

    /// Signed percent change from last month. Defaults to 0.
    #[arg(long)]
    pub change: Option<f64>,

    /// Free-text volume such as "500.00K". Defaults to "0".
    #[arg(long)]
    pub volume: Option<String>,
}

/// Arguments for the `favorites` command group.
#[derive(Debug, Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: FavoritesCommand,
}

/// Favorites subcommands.
#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List favorited records.
    List,

    /// Favorite the history record for a date.
    Add(FavoriteDateArgs),

    /// Remove the favorite for a date.
    Remove(FavoriteDateArgs),

    /// Remove every favorite and flag the list as cleared.
    Clear,
}

/// A single date argument, either spelling.
#[derive(Debug, Args)]
pub struct FavoriteDateArgs {
    /// Record date (`MM/DD/YYYY` or `YYYY-MM-DD`).
    pub date: String,
}

/// Arguments for the `settings` command group.
#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

/// Settings subcommands.
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the current settings.
    Show,

    /// Change one or both toggles; each change persists immediately.
    Set(SettingsSetArgs),
}

/// Arguments for `settings set`.
#[derive(Debug, Args)]
pub struct SettingsSetArgs {
    /// Enable or disable price alerts.
    #[arg(long)]
    pub price_alerts: Option<bool>,

    /// Enable or disable ATM distance display.
    #[arg(long)]
    pub atm_distance: Option<bool>,
}
