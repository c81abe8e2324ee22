//! Command-line interface definitions.

pub mod check;
pub mod events;
pub mod output;
pub mod quote;
pub mod rules;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use stayrate::api::{ApiClient, SnapshotSource};
use stayrate::availability::{AvailabilityService, AvailabilitySource};
use stayrate::config::{Config, Credentials};
use stayrate::domain::HalfDaySlot;
use stayrate::error::Result;

const DEFAULT_CONFIG: &str = "config.toml";

/// Stayrate - availability calendars and seasonal stay pricing.
#[derive(Parser, Debug)]
#[command(name = "stayrate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Read records from a JSON snapshot instead of the API
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the availability calendar of a property for one month
    Events(EventsArgs),

    /// Price a prospective stay
    Quote(QuoteArgs),

    /// List seasonal pricing rules and report overlaps
    Rules(PropertyArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `stayrate check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
}

/// Shared argument for commands that only need a property.
#[derive(Parser, Debug)]
pub struct PropertyArg {
    /// Property identifier
    #[arg(short, long)]
    pub property: String,
}

/// Arguments for the `events` subcommand.
#[derive(Parser, Debug)]
pub struct EventsArgs {
    /// Property identifier
    #[arg(short, long)]
    pub property: String,

    /// Month to show (YYYY-MM)
    #[arg(short, long)]
    pub month: String,

    /// Emit events with their style tokens as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `quote` subcommand.
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Property identifier
    #[arg(short, long)]
    pub property: String,

    /// Arrival date (YYYY-MM-DD)
    #[arg(long)]
    pub check_in: Option<NaiveDate>,

    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    pub check_out: Option<NaiveDate>,

    /// Arrival slot (morning or afternoon)
    #[arg(long)]
    pub check_in_slot: Option<HalfDaySlot>,

    /// Departure slot (morning or afternoon)
    #[arg(long)]
    pub check_out_slot: Option<HalfDaySlot>,

    /// Emit the itemized quote as JSON
    #[arg(long)]
    pub json: bool,
}

/// Load the configuration named on the command line, falling back to
/// `./config.toml` when present and built-in defaults otherwise.
#[allow(clippy::result_large_err)]
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(DEFAULT_CONFIG),
        None => Ok(Config {
            credentials: Credentials::from_env(),
            ..Config::default()
        }),
    }
}

/// Build the facade over the snapshot file when given, the API otherwise.
#[allow(clippy::result_large_err)]
pub fn service(config: &Config, snapshot: Option<&Path>) -> Result<AvailabilityService> {
    let source: Arc<dyn AvailabilitySource> = match snapshot {
        Some(path) => Arc::new(SnapshotSource::load(path)?),
        None => Arc::new(ApiClient::new(&config.api, &config.credentials)?),
    };
    Ok(AvailabilityService::new(source))
}
