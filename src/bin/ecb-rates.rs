//! ecb-rates CLI - Export the ECB daily reference rates to CSV
//!
//! Runs the full pipeline once: fetch the eurofxref feed, extract the rate
//! records, and write them to the default output file. Takes no arguments.
//!
//! ## Example Usage
//!
//! ```bash
//! ecb-rates
//! ```

use clap::Parser;
use colored::Colorize;
use ecb_rates::error::Result;
use ecb_rates::export::{default_output_path, export_to_csv};
use ecb_rates::extract::extract_rates;
use ecb_rates::fetch::{FeedClient, ECB_DAILY_URL};
use std::process;

/// ecb-rates: export the ECB daily foreign-exchange reference rates to CSV
#[derive(Parser)]
#[command(name = "ecb-rates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Export the ECB daily foreign-exchange reference rates to CSV", long_about = None)]
struct Cli {}

fn main() {
    env_logger::init();
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    log::info!("fetching {}", ECB_DAILY_URL);
    let payload = FeedClient::new()?.fetch_daily()?;

    let rates = extract_rates(&payload)?;

    let output = default_output_path();
    export_to_csv(&rates, &output)?;

    println!(
        "{} Exported {} exchange rates to {}",
        "✓".green().bold(),
        rates.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = vec!["ecb-rates"];
        let _cli = Cli::try_parse_from(args).unwrap();
    }

    #[test]
    fn test_cli_rejects_arguments() {
        let args = vec!["ecb-rates", "--output", "/tmp/rates.csv"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
