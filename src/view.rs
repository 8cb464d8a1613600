//! The `PercentPopulationVaccinated` view.
//!
//! Downstream visualization tooling consumes one named, re-evaluable result
//! set: the deaths/vaccinations join with its per-location rolling sum and
//! the share of each population vaccinated so far. The view is an ordinary
//! function over a loaded [`Dataset`]; results are memoized per dataset
//! fingerprint so repeated evaluation within one process is free.

use std::{
    collections::HashMap,
    sync::{LazyLock, RwLock}
};

use chrono::NaiveDate;
use compact_str::CompactString;
use serde::Serialize;

use crate::{
    dataset::Dataset,
    reports::{percentage, vaccination::rolling_vaccinations}
};

/// Global view cache
static VIEW_CACHE: LazyLock<RwLock<ViewCache>> = LazyLock::new(|| RwLock::new(ViewCache::new(8)));

/// One row of the `PercentPopulationVaccinated` view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentVaccinatedRow {
    pub continent:          CompactString,
    pub location:           CompactString,
    pub date:               NaiveDate,
    pub population:         Option<i64>,
    pub new_vaccinations:   Option<i64>,
    pub rolling_vaccinated: i64,
    /// `rolling_vaccinated / population * 100`, null when population is
    /// zero or null
    pub percent_vaccinated: Option<f64>
}

/// Evaluate the view for a dataset.
///
/// Each row extends the rolling-vaccination join with the vaccinated share
/// of the location's population. The result is cached per dataset
/// fingerprint.
pub fn percent_population_vaccinated(data: &Dataset) -> Vec<PercentVaccinatedRow> {
    let key = data.fingerprint();
    if let Some(rows) = get_cached(key) {
        return rows;
    }
    let rows = evaluate(data);
    cache_rows(key, rows.clone());
    rows
}

fn evaluate(data: &Dataset) -> Vec<PercentVaccinatedRow> {
    rolling_vaccinations(&data.deaths, &data.vaccinations)
        .into_iter()
        .map(|row| PercentVaccinatedRow {
            percent_vaccinated: percentage(row.rolling_vaccinated, row.population),
            continent:          row.continent,
            location:           row.location,
            date:               row.date,
            population:         row.population,
            new_vaccinations:   row.new_vaccinations,
            rolling_vaccinated: row.rolling_vaccinated
        })
        .collect()
}

/// Cache of evaluated views keyed by dataset fingerprint
struct ViewCache {
    cache:    HashMap<u64, Vec<PercentVaccinatedRow>>,
    max_size: usize
}

impl ViewCache {
    fn new(max_size: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_size),
            max_size
        }
    }

    fn get(&self, key: u64) -> Option<Vec<PercentVaccinatedRow>> {
        self.cache.get(&key).cloned()
    }

    fn insert(&mut self, key: u64, rows: Vec<PercentVaccinatedRow>) {
        // Simple eviction: clear half when full
        if self.cache.len() >= self.max_size {
            let keys: Vec<_> = self.cache.keys().take(self.max_size / 2).copied().collect();
            for key in keys {
                self.cache.remove(&key);
            }
        }
        self.cache.insert(key, rows);
    }
}

fn get_cached(key: u64) -> Option<Vec<PercentVaccinatedRow>> {
    VIEW_CACHE.read().ok()?.get(key)
}

fn cache_rows(key: u64, rows: Vec<PercentVaccinatedRow>) {
    if let Ok(mut cache) = VIEW_CACHE.write() {
        cache.insert(key, rows);
    }
}
