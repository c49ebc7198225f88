use std::path::PathBuf;

use clap::{Parser, Subcommand};
use daycount_calendar::CivilDate;

/// Proleptic Gregorian date <-> day-count converter.
#[derive(Parser)]
#[command(
    name = "daycount",
    version,
    about = "Convert between civil dates and days since 1970-01-01"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the day count of a date.
    ToDays(DateArgs),
    /// Print the date of a day count.
    FromDays(FromDaysArgs),
    /// Print day count, weekday and calendar facts of a date.
    Info(DateArgs),
    /// Print the current local date and its day count.
    Today,
    /// Check every date in a symmetric year range.
    Verify(VerifyArgs),
}

/// Arguments for subcommands taking a single date.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Date as YYYY-MM-DD; negative years are written -YYYY-MM-DD.
    #[arg(allow_hyphen_values = true)]
    pub date: CivilDate,
}

/// Arguments for the `from-days` subcommand.
#[derive(clap::Args)]
pub struct FromDaysArgs {
    /// Days since 1970-01-01 (may be negative).
    #[arg(allow_hyphen_values = true)]
    pub count: i64,
}

/// Arguments for the `verify` subcommand.
#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the sweep range: every year in -N..=N is checked.
    #[arg(long)]
    pub years: Option<i32>,

    /// Override the number of years per parallel task.
    #[arg(long)]
    pub chunk_years: Option<i32>,
}
