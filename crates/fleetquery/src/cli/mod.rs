//! Command-line interface for fleetquery.
//!
//! This module provides the CLI structure for the `fleetq` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{CapacityCommand, ConfigCommand, FleetCommand, OutputFormat, SelectCommand};

use crate::logging::Verbosity;

/// fleetq - Pick the right aircraft for the load
///
/// Selects the smallest aircraft in the fleet that meets minimum seat,
/// checked bag, and range requirements, and reports fleet-wide capacities.
#[derive(Debug, Parser)]
#[command(name = "fleetq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Select the smallest aircraft that meets the load requirements
    Select(SelectCommand),

    /// Show the fleet's maximum seating and checked bag capacity
    Capacity(CapacityCommand),

    /// List the aircraft in the fleet
    Fleet(FleetCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}
