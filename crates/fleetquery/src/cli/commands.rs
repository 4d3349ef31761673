//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::fleet::LoadRequirements;

/// Select command arguments.
#[derive(Debug, Args)]
pub struct SelectCommand {
    /// Minimum number of passenger seats
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub seats: i64,

    /// Minimum number of checked bags
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub bags: i64,

    /// Minimum range in kilometers
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub range: f64,

    /// Also list every aircraft that meets the requirements
    #[arg(short, long)]
    pub explain: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl SelectCommand {
    /// The load requirements described by these arguments.
    #[must_use]
    pub fn requirements(&self) -> LoadRequirements {
        LoadRequirements::new(self.seats, self.bags, self.range)
    }
}

/// Capacity command arguments.
#[derive(Debug, Args)]
pub struct CapacityCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Fleet listing arguments.
#[derive(Debug, Args)]
pub struct FleetCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration and the fleet it names
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_select_requirements() {
        let cmd = SelectCommand {
            seats: 18,
            bags: 36,
            range: 3000.0,
            explain: false,
            format: OutputFormat::Plain,
        };
        assert_eq!(cmd.requirements(), LoadRequirements::new(18, 36, 3000.0));
    }

    #[test]
    fn test_capacity_command_debug() {
        let cmd = CapacityCommand { json: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("json"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_output_format_debug() {
        assert_eq!(format!("{:?}", OutputFormat::Json), "Json");
    }
}
