//! # COVID Data Analyzer
//!
//! Exploratory statistics over a two-table COVID-19 dataset.
//!
//! `covid-data-analyzer` loads the deaths and vaccinations tables from CSV
//! files, joins them on `(location, date)`, and derives the descriptive
//! figures an analyst reaches for first: death percentages, infection
//! percentages, per-location and per-continent maxima, global totals, and
//! per-location rolling vaccination sums.
//!
//! # Architecture
//!
//! The analyzer operates in two phases:
//!
//! 1. **Loading** - Both CSV tables are parsed into typed rows in parallel.
//!    Nullable numeric cells are tolerated; a malformed cell rejects the load
//!    with its line number. Reported counts are additionally checked against
//!    the expected shape of the data (data-quality warnings).
//!
//! 2. **Reporting** - A report engine executes the selected reports in
//!    parallel using [`rayon`]. Every report is a pure function from rows to
//!    a typed table.
//!
//! # Quick Start
//!
//! ```bash
//! # Run every report
//! covid-data-analyzer report -d covid_deaths.csv -x covid_vaccinations.csv
//!
//! # One report as JSON for downstream tooling
//! covid-data-analyzer report -d deaths.csv -x vaccinations.csv \
//!     -r percent-vaccinated -f json
//!
//! # Export the reusable view for a BI tool
//! covid-data-analyzer report -d deaths.csv -x vaccinations.csv \
//!     -r percent-vaccinated -f csv > percent_population_vaccinated.csv
//!
//! # Download the source datasets
//! covid-data-analyzer fetch --dataset deaths --out covid_deaths.csv
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`COVID_DEATHS_PATH`, `COVID_VACCINATIONS_PATH`,
//!    etc.)
//! 3. `.covid-analyzer.toml` in current directory
//! 4. `~/.config/covid-analyzer/config.toml`
//!
//! ## Example Configuration
//!
//! ```toml
//! [data]
//! deaths = "data/covid_deaths.csv"
//! vaccinations = "data/covid_vaccinations.csv"
//!
//! [reports]
//! disabled = ["infection-peaks"]
//!
//! [retry]
//! max_retries = 3
//! initial_delay_ms = 1000
//! ```
//!
//! # Reports
//!
//! | ID | Category | Description |
//! |----|----------|-------------|
//! | `death-rate` | Mortality | Death percentage per location and date |
//! | `infection-rate` | Infection | Cases relative to population per row |
//! | `infection-peaks` | Infection | Highest infection rate per location |
//! | `death-toll-locations` | Mortality | Peak cumulative deaths per location |
//! | `death-toll-continents` | Mortality | Peak cumulative deaths per continent |
//! | `global-totals` | Summary | Worldwide new cases, deaths and death rate |
//! | `rolling-vaccinations` | Vaccination | Running vaccination sum per location |
//! | `percent-vaccinated` | Vaccination | Rolling vaccinations against population |
//!
//! # Exit Codes
//!
//! - `0` - Success, no data-quality warnings
//! - `1` - Data-quality warnings found, or a fatal error
//!
//! # Output Formats
//!
//! - `text` - Human-readable aligned tables (default)
//! - `json` - Structured JSON for programmatic processing
//! - `yaml` - YAML format for configuration management
//! - `csv` - RFC-4180 blocks for spreadsheet and BI consumption
//!
//! # Modules
//!
//! - [`dataset`] - CSV loading, typed rows, quality checks
//! - [`reports`] - Report engine and built-in reports
//! - [`view`] - The reusable `PercentPopulationVaccinated` view
//! - [`fetch`] - Dataset downloads with retry
//! - [`config`] - Configuration loading and validation
//! - [`output`] - Result formatting for various output formats
//! - [`error`] - Error types and constructors

mod cli;
mod config;
mod dataset;
mod error;
mod fetch;
mod output;
mod reports;
mod view;

use std::{path::PathBuf, process, time::Duration};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::main;

use crate::{
    cli::{Cli, Commands, DatasetArg, Format},
    config::Config,
    dataset::{Dataset, quality_issues},
    error::{AppResult, config_error},
    fetch::DatasetClient,
    output::{OutputFormat, OutputOptions, format_quality_issues, format_reports},
    reports::ReportRunner
};

#[main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

async fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Report {
            deaths,
            vaccinations,
            report,
            output_format,
            verbose,
            no_color
        } => {
            let deaths_path = deaths.or(config.data.deaths.clone()).ok_or_else(|| {
                config_error("No deaths CSV configured (use --deaths or COVID_DEATHS_PATH)")
            })?;
            let vaccinations_path =
                vaccinations.or(config.data.vaccinations.clone()).ok_or_else(|| {
                    config_error(
                        "No vaccinations CSV configured (use --vaccinations or \
                         COVID_VACCINATIONS_PATH)"
                    )
                })?;

            let data = Dataset::load(&deaths_path, &vaccinations_path)?;

            let output_opts = OutputOptions {
                format: match output_format {
                    Format::Text => OutputFormat::Text,
                    Format::Json => OutputFormat::Json,
                    Format::Yaml => OutputFormat::Yaml,
                    Format::Csv => OutputFormat::Csv
                },
                colored: !no_color,
                verbose
            };

            let runner = ReportRunner::with_config(config.reports.clone());
            let results = if report.is_empty() {
                runner.run(&data)
            } else {
                let ids: Vec<String> = report.iter().map(|r| r.id().to_string()).collect();
                runner.run_selected(&data, &ids)
            };
            println!("{}", format_reports(&results, &output_opts));

            let issues = quality_issues(&data.deaths);
            if verbose {
                println!("{}", data.summary());
                if !issues.is_empty() {
                    println!("{}", format_quality_issues(&issues, &output_opts));
                }
            }

            // Exit code reflects data quality, not report success: reports
            // over a loaded dataset cannot fail
            let exit_code = if issues.is_empty() { 0 } else { 1 };
            Ok(exit_code)
        }
        Commands::Fetch {
            dataset,
            url,
            out
        } => {
            let (resolved_url, default_name) = match (url, dataset) {
                (Some(u), _) => (u, "dataset.csv"),
                (None, Some(DatasetArg::Deaths)) => (
                    config.fetch.deaths_url.clone().ok_or_else(|| {
                        config_error("No deaths URL configured (use --url or COVID_DEATHS_URL)")
                    })?,
                    "covid_deaths.csv"
                ),
                (None, Some(DatasetArg::Vaccinations)) => (
                    config.fetch.vaccinations_url.clone().ok_or_else(|| {
                        config_error(
                            "No vaccinations URL configured (use --url or \
                             COVID_VACCINATIONS_URL)"
                        )
                    })?,
                    "covid_vaccinations.csv"
                ),
                (None, None) => {
                    return Err(config_error("Specify --dataset or --url for fetch"));
                }
            };
            let dest = out.unwrap_or_else(|| PathBuf::from(default_name));

            // Show progress indicator
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
            {
                pb.set_style(style);
            }
            pb.set_message(format!("Downloading {}...", resolved_url));
            pb.enable_steady_tick(Duration::from_millis(100));

            let client = DatasetClient::with_retry_config(config.retry);
            let bytes = client.download(&resolved_url, &dest).await?;

            pb.finish_and_clear();
            println!("Saved {} bytes to {}", bytes, dest.display());
            Ok(0)
        }
    }
}
