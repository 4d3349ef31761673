//! `fleetq` - CLI for fleetquery
//!
//! This binary loads the configured fleet and runs selection and capacity
//! queries against it.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use fleetquery::cli::{Cli, Command, ConfigCommand};
use fleetquery::{init_logging, report, Config, FleetService};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // `config path` and `config validate` must work even when the active
    // configuration is broken.
    let output = match cli.command {
        Command::Config(ConfigCommand::Path) => {
            Config::default_config_path().display().to_string()
        }
        Command::Config(ConfigCommand::Validate { file }) => {
            return Ok(handle_validate(
                file.or(cli.config)
                    .unwrap_or_else(Config::default_config_path),
            ));
        }
        Command::Config(ConfigCommand::Show { json }) => {
            report::config_summary(&Config::load_from(cli.config)?, json)?
        }
        Command::Select(cmd) => report::selection(
            &load_fleet(cli.config)?,
            cmd.requirements(),
            cmd.explain,
            cmd.format,
        )?,
        Command::Capacity(cmd) => report::capacity(&load_fleet(cli.config)?, cmd.json)?,
        Command::Fleet(cmd) => report::fleet_listing(&load_fleet(cli.config)?, cmd.format)?,
    };
    println!("{output}");
    Ok(ExitCode::SUCCESS)
}

fn load_fleet(config_path: Option<PathBuf>) -> fleetquery::Result<FleetService> {
    Config::load_from(config_path)?.build_fleet()
}

fn handle_validate(path: PathBuf) -> ExitCode {
    println!("Validating configuration: {}", path.display());
    match Config::load_fleet_from(path) {
        Ok(fleet) => {
            println!("Configuration is valid ({} aircraft).", fleet.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            ExitCode::FAILURE
        }
    }
}
