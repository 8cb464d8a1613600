//! Report engine for the COVID dataset.
//!
//! This module provides a parallel report execution engine. Each analysis is
//! a type implementing the [`Report`] trait; the [`ReportRunner`] executes
//! the selected reports in parallel using [`rayon`] and collects their
//! [`Table`] results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  Dataset    │────▶│ ReportRunner │────▶│   Tables    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                     ┌──────┴──────┐
//!                     │   Reports   │
//!                     │  (parallel) │
//!                     └─────────────┘
//! ```
//!
//! Reports never mutate the dataset; each one is a pure function from rows to
//! a table, so running them concurrently needs no coordination.
//!
//! # Built-in Reports
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
//! # Configuration
//!
//! Reports can be disabled by id via [`ReportsConfig`]:
//!
//! ```toml
//! [reports]
//! disabled = ["infection-peaks"]
//! ```

pub mod global;
pub mod rankings;
pub mod rates;
mod types;
pub mod vaccination;

use rayon::prelude::*;
pub use types::{Cell, ColumnVec, ReportCategory, ReportInfo, ReportResult, RowVec, Table};

use crate::{config::ReportsConfig, dataset::Dataset};

/// Trait for implementing dataset reports.
///
/// Reports are stateless computations over a loaded [`Dataset`]. They must be
/// `Send + Sync` for parallel execution.
pub trait Report: Send + Sync {
    /// Returns metadata about this report.
    fn info(&self) -> ReportInfo;

    /// Computes the report over the loaded dataset.
    fn run(&self, data: &Dataset) -> Table;
}

/// Percentage of a count over a nullable denominator.
///
/// Returns `None` when the denominator is null or not positive, so a report
/// row over an empty population or a zero case count carries a null rate
/// instead of failing.
pub fn percentage(numerator: i64, denominator: Option<i64>) -> Option<f64> {
    match denominator {
        Some(d) if d > 0 => Some(numerator as f64 / d as f64 * 100.0),
        _ => None
    }
}

/// Parallel report execution engine.
///
/// The runner holds the registered reports and executes them in parallel
/// against one dataset using [`rayon`]. Results come back in registration
/// order regardless of completion order.
///
/// # Example
///
/// ```ignore
/// let config = ReportsConfig {
///     disabled: vec!["infection-peaks".into()]
/// };
///
/// let runner = ReportRunner::with_config(config);
/// let results = runner.run(&dataset);
///
/// println!("{} reports produced", results.len());
/// ```
pub struct ReportRunner {
    reports: Vec<Box<dyn Report>>
}

impl Default for ReportRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRunner {
    /// Create a new runner with all built-in reports
    pub fn new() -> Self {
        Self::with_config(ReportsConfig::default())
    }

    /// Create a new runner with configuration
    pub fn with_config(config: ReportsConfig) -> Self {
        let all_reports: Vec<Box<dyn Report>> = vec![
            Box::new(rates::DeathRateReport),
            Box::new(rates::InfectionRateReport),
            Box::new(rankings::InfectionPeaksReport),
            Box::new(rankings::DeathTollByLocationReport),
            Box::new(rankings::DeathTollByContinentReport),
            Box::new(global::GlobalTotalsReport),
            Box::new(vaccination::RollingVaccinationsReport),
            Box::new(vaccination::PercentVaccinatedReport),
        ];

        let reports: Vec<Box<dyn Report>> = all_reports
            .into_iter()
            .filter(|r| {
                !config
                    .disabled
                    .iter()
                    .any(|d| d.eq_ignore_ascii_case(r.info().id))
            })
            .collect();

        Self {
            reports
        }
    }

    /// Metadata for every enabled report, in registration order
    pub fn available(&self) -> Vec<ReportInfo> {
        self.reports.iter().map(|r| r.info()).collect()
    }

    /// Run every enabled report (parallel execution)
    pub fn run(&self, data: &Dataset) -> Vec<ReportResult> {
        let all: Vec<&dyn Report> = self.reports.iter().map(|r| r.as_ref()).collect();
        Self::execute(&all, data)
    }

    /// Run only the reports whose ids are listed, in registration order
    pub fn run_selected(&self, data: &Dataset, ids: &[String]) -> Vec<ReportResult> {
        let selected: Vec<&dyn Report> = self
            .reports
            .iter()
            .map(|r| r.as_ref())
            .filter(|r| ids.iter().any(|id| id.eq_ignore_ascii_case(r.info().id)))
            .collect();
        Self::execute(&selected, data)
    }

    fn execute(reports: &[&dyn Report], data: &Dataset) -> Vec<ReportResult> {
        reports
            .par_iter()
            .map(|report| Self::result_of(*report, data))
            .collect()
    }

    fn result_of(report: &dyn Report, data: &Dataset) -> ReportResult {
        let info = report.info();
        ReportResult {
            id:       info.id,
            name:     info.name,
            category: info.category,
            table:    report.run(data)
        }
    }
}
