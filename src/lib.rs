//! IPv4 subnet calculation.
//!
//! Derives the network address, broadcast address, subnet/wildcard masks, usable host
//! range and address counts of an IPv4 subnet from an address plus prefix length, an
//! address plus mask, or text such as `10.0.0.5/24` or `10.0.0.5 255.255.255.0`.
//!
//! ```
//! use subnet_calc::models::Subnet;
//! let subnet = Subnet::parse("172.16.5.130/26").unwrap();
//! assert_eq!(subnet.to_string(), "172.16.5.128/26");
//! assert_eq!(subnet.usable_addresses(), 62);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use colored::Colorize;
use config::{Config, OutputFormat};
use models::{Subnet, SubnetSummary};
use std::error::Error;

pub use error::{SubnetError, SubnetResult};

/// Compute a summary for every input, keeping failures next to their input.
pub fn summarize(inputs: &[String]) -> Vec<(String, SubnetResult<SubnetSummary>)> {
    inputs
        .iter()
        .map(|input| {
            let result = Subnet::parse(input).map(|subnet| SubnetSummary::new(input, &subnet));
            (input.clone(), result)
        })
        .collect()
}

/// Render summaries in the requested format.
pub fn render(
    summaries: &[SubnetSummary],
    format: OutputFormat,
    color: bool,
) -> Result<String, Box<dyn Error>> {
    let out = match format {
        OutputFormat::Table => output::render_table(summaries, color),
        OutputFormat::Csv => output::render_csv(summaries),
        OutputFormat::Json => output::render_json(summaries)?,
    };
    Ok(out)
}

/// Compute and print every configured network.
///
/// Inputs that fail are reported on stderr without stopping the others; the returned
/// error counts them.
pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    log::info!("#Start run() networks={}", config.networks.len());
    if config.no_color {
        colored::control::set_override(false);
    }

    let mut summaries = Vec::new();
    let mut failed = 0usize;
    for (input, result) in summarize(&config.networks) {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                failed += 1;
                log::warn!("{input}: {e}");
                eprintln!("{} {input}: {e}", "error".red().bold());
            }
        }
    }

    if !summaries.is_empty() {
        print!("{}", render(&summaries, config.format, !config.no_color)?);
    }

    if failed > 0 {
        return Err(format!(
            "{failed} of {} network(s) could not be computed",
            config.networks.len()
        )
        .into());
    }
    Ok(())
}
