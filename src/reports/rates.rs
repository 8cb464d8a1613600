//! Per-row rate computations.
//!
//! Both rates are derived per reported row: the death percentage relates
//! cumulative deaths to cumulative cases, the infection percentage relates
//! cumulative cases to population. A zero or missing denominator yields a
//! null rate rather than an error.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use covid_data_analyzer::{
//!     dataset::DeathsRow,
//!     reports::rates::{death_rates, infection_rates}
//! };
//!
//! let mut row = DeathsRow::new("Testland", NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
//! row.population = Some(1000);
//! row.total_cases = Some(200);
//! row.total_deaths = Some(10);
//! let rows = vec![row];
//!
//! assert_eq!(death_rates(&rows)[0].death_rate, Some(5.0));
//! assert_eq!(infection_rates(&rows)[0].infection_rate, Some(20.0));
//! ```

use chrono::NaiveDate;
use compact_str::CompactString;
use serde::Serialize;

use super::{Cell, Report, ReportCategory, ReportInfo, Table, percentage};
use crate::dataset::{Dataset, DeathsRow, country_rows};

/// Death percentage for one location and date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MortalityRow {
    pub location:     CompactString,
    pub date:         NaiveDate,
    pub total_cases:  Option<i64>,
    pub total_deaths: Option<i64>,
    /// `total_deaths / total_cases * 100`, null when cases are zero or null
    pub death_rate:   Option<f64>
}

/// Infection percentage for one location and date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfectionRow {
    pub location:       CompactString,
    pub date:           NaiveDate,
    pub population:     Option<i64>,
    pub total_cases:    Option<i64>,
    /// `total_cases / population * 100`, null when population is zero or null
    pub infection_rate: Option<f64>
}

/// Death percentage per row.
///
/// Null `total_deaths` counts as zero deaths; null or zero `total_cases`
/// leaves the rate null.
pub fn death_rates<'a, I>(rows: I) -> Vec<MortalityRow>
where
    I: IntoIterator<Item = &'a DeathsRow>
{
    rows.into_iter()
        .map(|row| MortalityRow {
            location:     row.location.clone(),
            date:         row.date,
            total_cases:  row.total_cases,
            total_deaths: row.total_deaths,
            death_rate:   percentage(row.total_deaths.unwrap_or(0), row.total_cases)
        })
        .collect()
}

/// Infection percentage per row.
pub fn infection_rates<'a, I>(rows: I) -> Vec<InfectionRow>
where
    I: IntoIterator<Item = &'a DeathsRow>
{
    rows.into_iter()
        .map(|row| InfectionRow {
            location:       row.location.clone(),
            date:           row.date,
            population:     row.population,
            total_cases:    row.total_cases,
            infection_rate: percentage(row.total_cases.unwrap_or(0), row.population)
        })
        .collect()
}

pub struct DeathRateReport;

impl Report for DeathRateReport {
    fn info(&self) -> ReportInfo {
        ReportInfo {
            id:       "death-rate",
            name:     "Death percentage by location and date",
            category: ReportCategory::Mortality
        }
    }

    fn run(&self, data: &Dataset) -> Table {
        let mut table = Table::new([
            "location",
            "date",
            "total_cases",
            "total_deaths",
            "death_rate_pct"
        ]);
        for row in death_rates(country_rows(&data.deaths)) {
            table.push_row([
                Cell::from(row.location),
                Cell::from(row.date),
                Cell::from(row.total_cases),
                Cell::from(row.total_deaths),
                Cell::from(row.death_rate)
            ]);
        }
        table
    }
}

pub struct InfectionRateReport;

impl Report for InfectionRateReport {
    fn info(&self) -> ReportInfo {
        ReportInfo {
            id:       "infection-rate",
            name:     "Infection percentage by location and date",
            category: ReportCategory::Infection
        }
    }

    fn run(&self, data: &Dataset) -> Table {
        let mut table = Table::new([
            "location",
            "date",
            "population",
            "total_cases",
            "infection_rate_pct"
        ]);
        for row in infection_rates(country_rows(&data.deaths)) {
            table.push_row([
                Cell::from(row.location),
                Cell::from(row.date),
                Cell::from(row.population),
                Cell::from(row.total_cases),
                Cell::from(row.infection_rate)
            ]);
        }
        table
    }
}
