use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// COVID Data Analyzer - Descriptive statistics over deaths and vaccinations
#[derive(Parser, Debug)]
#[command(name = "covid-data-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run analysis reports against the loaded datasets
    Report {
        /// Path to the deaths CSV file
        #[arg(short, long, env = "COVID_DEATHS_PATH")]
        deaths: Option<PathBuf>,

        /// Path to the vaccinations CSV file
        #[arg(short = 'x', long, env = "COVID_VACCINATIONS_PATH")]
        vaccinations: Option<PathBuf>,

        /// Reports to run (repeatable, default: all enabled)
        #[arg(short, long, value_enum)]
        report: Vec<ReportArg>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Enable verbose output with dataset summary and quality warnings
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Download a dataset CSV from a remote source
    Fetch {
        /// Which configured dataset to download
        #[arg(short = 'D', long, value_enum)]
        dataset: Option<DatasetArg>,

        /// Explicit source URL (overrides the configured one)
        #[arg(short, long)]
        url: Option<String>,

        /// Destination file path
        #[arg(short, long)]
        out: Option<PathBuf>
    }
}

#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum ReportArg {
    DeathRate,
    InfectionRate,
    InfectionPeaks,
    DeathTollLocations,
    DeathTollContinents,
    GlobalTotals,
    RollingVaccinations,
    PercentVaccinated
}

impl ReportArg {
    /// Get the report identifier used by the engine
    pub fn id(&self) -> &'static str {
        match self {
            Self::DeathRate => "death-rate",
            Self::InfectionRate => "infection-rate",
            Self::InfectionPeaks => "infection-peaks",
            Self::DeathTollLocations => "death-toll-locations",
            Self::DeathTollContinents => "death-toll-continents",
            Self::GlobalTotals => "global-totals",
            Self::RollingVaccinations => "rolling-vaccinations",
            Self::PercentVaccinated => "percent-vaccinated"
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DatasetArg {
    Deaths,
    Vaccinations
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml,
    Csv
}
