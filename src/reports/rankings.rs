//! Per-group maxima: infection peaks and death tolls.
//!
//! These reports reduce the day-by-day rows to one row per location or
//! continent, keeping the maximum cumulative figure seen for the group.
//! Groups are keyed with an [`IndexMap`] so ties keep first-seen order.

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::Serialize;

use super::{Cell, Report, ReportCategory, ReportInfo, Table, percentage};
use crate::dataset::{Dataset, DeathsRow, country_rows};

/// Peak cumulative cases for one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfectionPeak {
    pub location:            CompactString,
    pub population:          Option<i64>,
    pub peak_cases:          i64,
    /// `peak_cases / population * 100`, null when population is zero or null
    pub peak_infection_rate: Option<f64>
}

/// Peak cumulative deaths for one group (location or continent)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeathToll {
    pub name:         CompactString,
    pub total_deaths: i64
}

/// Highest cumulative case count per `(location, population)` group, sorted
/// by peak infection percentage descending. Null case counts count as zero.
pub fn infection_peaks<'a, I>(rows: I) -> Vec<InfectionPeak>
where
    I: IntoIterator<Item = &'a DeathsRow>
{
    let mut groups: IndexMap<(CompactString, Option<i64>), i64> = IndexMap::new();
    for row in rows {
        let peak = groups
            .entry((row.location.clone(), row.population))
            .or_insert(0);
        let cases = row.total_cases.unwrap_or(0);
        if cases > *peak {
            *peak = cases;
        }
    }
    let mut peaks: Vec<InfectionPeak> = groups
        .into_iter()
        .map(|((location, population), peak_cases)| InfectionPeak {
            location,
            population,
            peak_cases,
            peak_infection_rate: percentage(peak_cases, population)
        })
        .collect();
    peaks.sort_by(|a, b| {
        b.peak_infection_rate
            .partial_cmp(&a.peak_infection_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    peaks
}

/// Highest cumulative death count per location, descending.
///
/// Aggregate rows (null continent) are excluded.
pub fn death_toll_by_location<'a, I>(rows: I) -> Vec<DeathToll>
where
    I: IntoIterator<Item = &'a DeathsRow>
{
    death_toll(rows, |row| {
        row.continent.as_ref().map(|_| row.location.clone())
    })
}

/// Highest cumulative death count per continent, descending.
pub fn death_toll_by_continent<'a, I>(rows: I) -> Vec<DeathToll>
where
    I: IntoIterator<Item = &'a DeathsRow>
{
    death_toll(rows, |row| row.continent.clone())
}

fn death_toll<'a, I, K>(rows: I, key: K) -> Vec<DeathToll>
where
    I: IntoIterator<Item = &'a DeathsRow>,
    K: Fn(&DeathsRow) -> Option<CompactString>
{
    let mut groups: IndexMap<CompactString, i64> = IndexMap::new();
    for row in rows {
        let Some(name) = key(row) else {
            continue;
        };
        let toll = groups.entry(name).or_insert(0);
        let deaths = row.total_deaths.unwrap_or(0);
        if deaths > *toll {
            *toll = deaths;
        }
    }
    let mut tolls: Vec<DeathToll> = groups
        .into_iter()
        .map(|(name, total_deaths)| DeathToll {
            name,
            total_deaths
        })
        .collect();
    tolls.sort_by(|a, b| b.total_deaths.cmp(&a.total_deaths).then_with(|| a.name.cmp(&b.name)));
    tolls
}

pub struct InfectionPeaksReport;

impl Report for InfectionPeaksReport {
    fn info(&self) -> ReportInfo {
        ReportInfo {
            id:       "infection-peaks",
            name:     "Highest infection rate by location",
            category: ReportCategory::Infection
        }
    }

    fn run(&self, data: &Dataset) -> Table {
        let mut table = Table::new([
            "location",
            "population",
            "peak_cases",
            "peak_infection_rate_pct"
        ]);
        for peak in infection_peaks(country_rows(&data.deaths)) {
            table.push_row([
                Cell::from(peak.location),
                Cell::from(peak.population),
                Cell::from(peak.peak_cases),
                Cell::from(peak.peak_infection_rate)
            ]);
        }
        table
    }
}

pub struct DeathTollByLocationReport;

impl Report for DeathTollByLocationReport {
    fn info(&self) -> ReportInfo {
        ReportInfo {
            id:       "death-toll-locations",
            name:     "Total deaths by location",
            category: ReportCategory::Mortality
        }
    }

    fn run(&self, data: &Dataset) -> Table {
        let mut table = Table::new(["location", "total_deaths"]);
        for toll in death_toll_by_location(&data.deaths) {
            table.push_row([Cell::from(toll.name), Cell::from(toll.total_deaths)]);
        }
        table
    }
}

pub struct DeathTollByContinentReport;

impl Report for DeathTollByContinentReport {
    fn info(&self) -> ReportInfo {
        ReportInfo {
            id:       "death-toll-continents",
            name:     "Total deaths by continent",
            category: ReportCategory::Mortality
        }
    }

    fn run(&self, data: &Dataset) -> Table {
        let mut table = Table::new(["continent", "total_deaths"]);
        for toll in death_toll_by_continent(&data.deaths) {
            table.push_row([Cell::from(toll.name), Cell::from(toll.total_deaths)]);
        }
        table
    }
}
