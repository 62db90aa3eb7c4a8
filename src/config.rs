//! Command line and environment configuration.
//!
//! Environment variables (optionally from a `.env` file) supply defaults that flags override.

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Output format for computed subnets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "subnet-calc",
    version,
    about = "Compute IPv4 subnet parameters from A.B.C.D/N, A.B.C.D/M.M.M.M or \"A.B.C.D M.M.M.M\""
)]
pub struct Config {
    /// Networks to compute, e.g. 10.0.0.5/24 or "10.0.0.5 255.255.255.0"
    #[arg(value_name = "NETWORK", required = true)]
    pub networks: Vec<String>,

    /// Output format
    #[arg(long, short, value_enum, env = "SUBNET_CALC_FORMAT", default_value = "table")]
    pub format: OutputFormat,

    /// Log level used when no log4rs.yml is present
    #[arg(long, env = "SUBNET_CALC_LOG_LEVEL", default_value = "warn", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Disable ANSI colours
    #[arg(long)]
    pub no_color: bool,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>()
        .map_err(|_| format!("'{s}' is not one of off, error, warn, info, debug, trace"))
}
