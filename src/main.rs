mod cli;
mod config;
mod convert;
mod convert_cmd;
mod logging;
mod verify_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::ToDays(args) => convert_cmd::run_to_days(args),
        Command::FromDays(args) => convert_cmd::run_from_days(args),
        Command::Info(args) => convert_cmd::run_info(args),
        Command::Today => convert_cmd::run_today(),
        Command::Verify(args) => verify_cmd::run(args),
    }
}
