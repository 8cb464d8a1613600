//! Vaccination rollout: the deaths/vaccinations join and its running sum.
//!
//! The two tables join 1:1 on `(location, date)` with inner-join semantics:
//! a date missing from the vaccinations table produces no output row. Within
//! each location the rows are sorted by date and folded into a running total,
//! with null `new_vaccinations` treated as zero so the total carries through
//! reporting gaps.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use covid_data_analyzer::{
//!     dataset::{DeathsRow, VaccinationRow},
//!     reports::vaccination::rolling_vaccinations
//! };
//!
//! let dates: Vec<NaiveDate> = (1..=3)
//!     .map(|d| NaiveDate::from_ymd_opt(2021, 1, d).unwrap())
//!     .collect();
//! let deaths: Vec<DeathsRow> = dates
//!     .iter()
//!     .map(|&date| {
//!         let mut row = DeathsRow::new("Testland", date);
//!         row.continent = Some("Oceania".into());
//!         row
//!     })
//!     .collect();
//! let shots = vec![Some(100), None, Some(50)];
//! let vaccinations: Vec<VaccinationRow> = dates
//!     .iter()
//!     .zip(shots)
//!     .map(|(&date, n)| VaccinationRow::new("Testland", date, n))
//!     .collect();
//!
//! let rolling = rolling_vaccinations(&deaths, &vaccinations);
//! let totals: Vec<i64> = rolling.iter().map(|r| r.rolling_vaccinated).collect();
//! assert_eq!(totals, vec![100, 100, 150]);
//! ```

use std::collections::HashMap;

use chrono::NaiveDate;
use compact_str::CompactString;
use indexmap::IndexMap;
use serde::Serialize;

use super::{Cell, Report, ReportCategory, ReportInfo, Table};
use crate::dataset::{Dataset, DeathsRow, VaccinationRow};

/// One row of the joined rolling-vaccination sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingVaccinationRow {
    pub continent:          CompactString,
    pub location:           CompactString,
    pub date:               NaiveDate,
    pub population:         Option<i64>,
    pub new_vaccinations:   Option<i64>,
    /// Running sum of `new_vaccinations` for this location up to this date
    pub rolling_vaccinated: i64
}

/// Inner-join deaths and vaccinations on `(location, date)` and compute the
/// per-location running vaccination sum in date order.
///
/// Aggregate rows (null continent) are excluded. Null `new_vaccinations`
/// adds nothing, so the running total is non-decreasing for non-negative
/// inputs.
pub fn rolling_vaccinations(
    deaths: &[DeathsRow],
    vaccinations: &[VaccinationRow]
) -> Vec<RollingVaccinationRow> {
    let mut shots: HashMap<(&CompactString, NaiveDate), Option<i64>> =
        HashMap::with_capacity(vaccinations.len());
    for row in vaccinations {
        shots.insert((&row.location, row.date), row.new_vaccinations);
    }

    let mut groups: IndexMap<&CompactString, Vec<&DeathsRow>> = IndexMap::new();
    for row in deaths {
        if row.continent.is_some() {
            groups.entry(&row.location).or_default().push(row);
        }
    }

    let mut out = Vec::new();
    for (_, mut rows) in groups {
        rows.sort_by_key(|row| row.date);
        let mut rolling = 0i64;
        for row in rows {
            let Some(continent) = &row.continent else {
                continue;
            };
            // inner join: dates absent from the vaccinations table drop out
            let Some(&new_vaccinations) = shots.get(&(&row.location, row.date)) else {
                continue;
            };
            rolling += new_vaccinations.unwrap_or(0);
            out.push(RollingVaccinationRow {
                continent: continent.clone(),
                location: row.location.clone(),
                date: row.date,
                population: row.population,
                new_vaccinations,
                rolling_vaccinated: rolling
            });
        }
    }
    out
}

pub struct RollingVaccinationsReport;

impl Report for RollingVaccinationsReport {
    fn info(&self) -> ReportInfo {
        ReportInfo {
            id:       "rolling-vaccinations",
            name:     "Rolling vaccination count by location",
            category: ReportCategory::Vaccination
        }
    }

    fn run(&self, data: &Dataset) -> Table {
        let mut table = Table::new([
            "continent",
            "location",
            "date",
            "population",
            "new_vaccinations",
            "rolling_vaccinated"
        ]);
        for row in rolling_vaccinations(&data.deaths, &data.vaccinations) {
            table.push_row([
                Cell::from(row.continent),
                Cell::from(row.location),
                Cell::from(row.date),
                Cell::from(row.population),
                Cell::from(row.new_vaccinations),
                Cell::from(row.rolling_vaccinated)
            ]);
        }
        table
    }
}

pub struct PercentVaccinatedReport;

impl Report for PercentVaccinatedReport {
    fn info(&self) -> ReportInfo {
        ReportInfo {
            id:       "percent-vaccinated",
            name:     "Percent of population vaccinated",
            category: ReportCategory::Vaccination
        }
    }

    fn run(&self, data: &Dataset) -> Table {
        let mut table = Table::new([
            "continent",
            "location",
            "date",
            "population",
            "new_vaccinations",
            "rolling_vaccinated",
            "percent_vaccinated"
        ]);
        for row in crate::view::percent_population_vaccinated(data) {
            table.push_row([
                Cell::from(row.continent),
                Cell::from(row.location),
                Cell::from(row.date),
                Cell::from(row.population),
                Cell::from(row.new_vaccinations),
                Cell::from(row.rolling_vaccinated),
                Cell::from(row.percent_vaccinated)
            ]);
        }
        table
    }
}
