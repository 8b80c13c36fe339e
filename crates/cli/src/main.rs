// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # binloc
//!
//! Command-line driver for the bin-location engine. Every subcommand reads
//! JSON input files, runs one engine operation and prints the result as
//! pretty JSON on stdout. Logs go to stderr and follow `RUST_LOG` when set,
//! the `-v`/`-q` flags otherwise.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use binloc::RangeMap;
use binloc_api::{
    BulkDefaults, SuggestionRequest, build_bulk_create_request, build_grid, expiry_status,
    preview_bulk, rank_locations, validate_template_request, warehouse_stats,
};
use binloc_domain::{CapacitySnapshot, LocationId, LocationRecord, LocationTemplate};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use serde::{Serialize, de::DeserializeOwned};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    args.run()
}

/// Bin-location templating and layout engine
#[derive(Debug, Parser)]
#[command(name = "binloc", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Validate a location template
    #[command(visible_alias = "v")]
    Validate {
        /// Template JSON file
        #[arg(short, long)]
        template: PathBuf,
    },

    /// Preview a bulk creation
    #[command(visible_alias = "p")]
    Preview {
        /// Template JSON file
        #[arg(short, long)]
        template: PathBuf,
        /// Ranges JSON file, one range per field
        #[arg(short, long)]
        ranges: PathBuf,
        /// JSON array of codes already in the warehouse
        #[arg(long)]
        existing_codes: Option<PathBuf>,
    },

    /// Build the bulk creation request for a warehouse
    #[command(visible_alias = "c")]
    Create {
        /// Warehouse receiving the locations
        #[arg(short, long)]
        warehouse_id: Uuid,
        /// Template JSON file
        #[arg(short, long)]
        template: PathBuf,
        /// Ranges JSON file, one range per field
        #[arg(short, long)]
        ranges: PathBuf,
        /// Defaults JSON file applied to every location
        #[arg(long)]
        defaults: Option<PathBuf>,
        /// JSON array of codes already in the warehouse
        #[arg(long)]
        existing_codes: Option<PathBuf>,
    },

    /// Lay out stored locations on a grid
    #[command(visible_alias = "g")]
    Grid {
        /// Template JSON file
        #[arg(short, long)]
        template: PathBuf,
        /// JSON array of stored locations
        #[arg(short = 'l', long)]
        records: PathBuf,
        /// Field to split the map by, e.g. `level`
        #[arg(long)]
        layer: Option<String>,
    },

    /// Rank stored locations for an item
    #[command(visible_alias = "s")]
    Suggest {
        /// JSON array of stored locations
        #[arg(short = 'l', long)]
        records: PathBuf,
        /// Criteria JSON file
        #[arg(short, long)]
        criteria: Option<PathBuf>,
        /// JSON object of capacity snapshots keyed by location id
        #[arg(long)]
        capacity: Option<PathBuf>,
        /// Most suggestions to print; overrides the criteria file
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Summarize occupancy of stored locations
    Stats {
        /// JSON array of stored locations
        #[arg(short = 'l', long)]
        records: PathBuf,
    },

    /// Report the urgency of a use-by date
    Expiry {
        /// Use-by date, YYYY-MM-DD
        #[arg(value_parser = parse_date)]
        use_by: Date,
        /// Reference date, YYYY-MM-DD; defaults to today (UTC)
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Validate { template } => {
                let template: LocationTemplate = read_json(&template)?;
                print_json(&validate_template_request(&template))
            }
            Self::Preview {
                template,
                ranges,
                existing_codes,
            } => {
                let template: LocationTemplate = read_json(&template)?;
                let ranges: RangeMap = read_json(&ranges)?;
                let existing: Vec<String> = read_optional_json(existing_codes.as_deref())?;
                print_json(&preview_bulk(&template, &ranges, &existing)?)
            }
            Self::Create {
                warehouse_id,
                template,
                ranges,
                defaults,
                existing_codes,
            } => {
                let template: LocationTemplate = read_json(&template)?;
                let ranges: RangeMap = read_json(&ranges)?;
                let defaults: Option<BulkDefaults> =
                    defaults.as_deref().map(read_json).transpose()?;
                let existing: Vec<String> = read_optional_json(existing_codes.as_deref())?;
                print_json(&build_bulk_create_request(
                    warehouse_id,
                    &template,
                    ranges,
                    defaults,
                    &existing,
                )?)
            }
            Self::Grid {
                template,
                records,
                layer,
            } => {
                let template: LocationTemplate = read_json(&template)?;
                let records: Vec<LocationRecord> = read_json(&records)?;
                print_json(&build_grid(&template, &records, layer.as_deref()))
            }
            Self::Suggest {
                records,
                criteria,
                capacity,
                limit,
            } => {
                let records: Vec<LocationRecord> = read_json(&records)?;
                let request: SuggestionRequest = read_optional_json(criteria.as_deref())?;
                let snapshots: BTreeMap<LocationId, CapacitySnapshot> =
                    read_optional_json(capacity.as_deref())?;
                print_json(&rank_locations(
                    &records,
                    &snapshots,
                    &request.criteria,
                    limit.or(request.limit),
                ))
            }
            Self::Stats { records } => {
                let records: Vec<LocationRecord> = read_json(&records)?;
                print_json(&warehouse_stats(&records))
            }
            Self::Expiry { use_by, today } => {
                let today: Date = today.unwrap_or_else(|| OffsetDateTime::now_utc().date());
                print_json(&expiry_status(use_by, today))
            }
        }
    }
}

fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, DATE_FORMAT)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!(path = %path.display(), "Reading input");
    let raw: String = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

fn read_optional_json<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    path.map_or_else(|| Ok(T::default()), read_json)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered: String =
        serde_json::to_string_pretty(value).wrap_err("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}
