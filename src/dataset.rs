//! Dataset loading and representation.
//!
//! This module loads the two input tables — deaths and vaccinations, keyed by
//! `(location, date)` — from CSV files into typed in-memory rows. Numeric
//! cells are nullable and tolerated as text (`""`, `NA`, `NULL`, `"123.0"`);
//! a cell that cannot be interpreted as a count rejects the whole load with
//! the offending line number. Extra CSV columns are ignored.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use covid_data_analyzer::dataset::{DeathsRow, country_rows};
//!
//! let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
//!
//! let world = DeathsRow::new("World", date);
//! let mut albania = DeathsRow::new("Albania", date);
//! albania.continent = Some("Europe".into());
//!
//! let rows = vec![world, albania];
//! let countries = country_rows(&rows);
//!
//! assert_eq!(countries.len(), 1);
//! assert_eq!(countries[0].location.as_str(), "Albania");
//! ```

mod types;

use std::{fs::File, path::Path};

pub use types::{Dataset, DeathsRow, QualityIssue, VaccinationRow};

use crate::error::{AppResult, csv_parse_error, file_read_error};

impl Dataset {
    /// Load both tables, in parallel
    ///
    /// # Errors
    ///
    /// Returns error if either file cannot be read or contains a malformed
    /// record
    pub fn load(deaths_path: &Path, vaccinations_path: &Path) -> AppResult<Self> {
        let (deaths, vaccinations) = rayon::join(
            || load_deaths(deaths_path),
            || load_vaccinations(vaccinations_path)
        );
        Ok(Self {
            deaths:       deaths?,
            vaccinations: vaccinations?
        })
    }
}

/// Load the deaths table from a CSV file
pub fn load_deaths(path: &Path) -> AppResult<Vec<DeathsRow>> {
    load_table(path)
}

/// Load the vaccinations table from a CSV file
pub fn load_vaccinations(path: &Path) -> AppResult<Vec<VaccinationRow>> {
    load_table(path)
}

fn load_table<T>(path: &Path) -> AppResult<Vec<T>>
where
    T: serde::de::DeserializeOwned
{
    let display = path.display().to_string();
    let file = File::open(path).map_err(|e| file_read_error(&display, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.map_err(|e| csv_parse_error(&display, &e))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Rows with a continent set, ordered by continent then location then date.
///
/// The input mixes per-country rows with aggregate rows (World, income
/// groups, whole continents) whose continent cell is empty; every
/// per-country breakdown starts from this filter.
pub fn country_rows(rows: &[DeathsRow]) -> Vec<&DeathsRow> {
    let mut countries: Vec<&DeathsRow> = rows.iter().filter(|r| r.continent.is_some()).collect();
    countries.sort_by(|a, b| {
        a.continent
            .cmp(&b.continent)
            .then_with(|| a.location.cmp(&b.location))
            .then_with(|| a.date.cmp(&b.date))
    });
    countries
}

/// Check reported counts against the expected shape of the data.
///
/// Counts must be non-negative and a day's new cases can never exceed the
/// cumulative total. Violations are warnings, not load failures: the source
/// data is known to contain revisions and corrections.
pub fn quality_issues(rows: &[DeathsRow]) -> Vec<QualityIssue> {
    let mut issues = Vec::new();
    for row in rows {
        let counts = [
            ("total_cases", row.total_cases),
            ("new_cases", row.new_cases),
            ("total_deaths", row.total_deaths),
            ("new_deaths", row.new_deaths)
        ];
        for (name, value) in counts {
            if let Some(v) = value
                && v < 0
            {
                issues.push(QualityIssue {
                    location: row.location.clone(),
                    date:     row.date,
                    message:  format!("negative {}: {}", name, v)
                });
            }
        }
        if let (Some(total), Some(new)) = (row.total_cases, row.new_cases)
            && new > total
        {
            issues.push(QualityIssue {
                location: row.location.clone(),
                date:     row.date,
                message:  format!("new_cases {} exceeds total_cases {}", new, total)
            });
        }
    }
    issues
}
