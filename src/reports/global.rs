//! Whole-dataset totals.

use serde::Serialize;

use super::{Cell, Report, ReportCategory, ReportInfo, Table, percentage};
use crate::dataset::{Dataset, DeathsRow};

/// Worldwide sums of daily counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalTotals {
    pub total_cases:  i64,
    pub total_deaths: i64,
    /// `total_deaths / total_cases * 100`, null when no cases were reported
    pub death_rate:   Option<f64>
}

/// Sum new cases and new deaths across every per-country row.
///
/// Aggregate rows (null continent) are excluded so the world is not counted
/// twice; null daily counts count as zero.
pub fn global_totals<'a, I>(rows: I) -> GlobalTotals
where
    I: IntoIterator<Item = &'a DeathsRow>
{
    let mut total_cases = 0i64;
    let mut total_deaths = 0i64;
    for row in rows {
        if row.continent.is_none() {
            continue;
        }
        total_cases += row.new_cases.unwrap_or(0);
        total_deaths += row.new_deaths.unwrap_or(0);
    }
    GlobalTotals {
        total_cases,
        total_deaths,
        death_rate: percentage(total_deaths, Some(total_cases))
    }
}

pub struct GlobalTotalsReport;

impl Report for GlobalTotalsReport {
    fn info(&self) -> ReportInfo {
        ReportInfo {
            id:       "global-totals",
            name:     "Global case and death totals",
            category: ReportCategory::Summary
        }
    }

    fn run(&self, data: &Dataset) -> Table {
        let totals = global_totals(&data.deaths);
        let mut table = Table::new(["total_cases", "total_deaths", "death_rate_pct"]);
        table.push_row([
            Cell::from(totals.total_cases),
            Cell::from(totals.total_deaths),
            Cell::from(totals.death_rate)
        ]);
        table
    }
}
