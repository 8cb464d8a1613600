// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use covid_data_analyzer::cli::{DatasetArg, Format, ReportArg};

#[test]
fn test_report_arg_ids() {
    assert_eq!(ReportArg::DeathRate.id(), "death-rate");
    assert_eq!(ReportArg::InfectionRate.id(), "infection-rate");
    assert_eq!(ReportArg::InfectionPeaks.id(), "infection-peaks");
    assert_eq!(ReportArg::DeathTollLocations.id(), "death-toll-locations");
    assert_eq!(ReportArg::DeathTollContinents.id(), "death-toll-continents");
    assert_eq!(ReportArg::GlobalTotals.id(), "global-totals");
    assert_eq!(ReportArg::RollingVaccinations.id(), "rolling-vaccinations");
    assert_eq!(ReportArg::PercentVaccinated.id(), "percent-vaccinated");
}

#[test]
fn test_dataset_arg_variants() {
    let _deaths = DatasetArg::Deaths;
    let _vaccinations = DatasetArg::Vaccinations;
}

#[test]
fn test_format_variants() {
    let _text = Format::Text;
    let _json = Format::Json;
    let _yaml = Format::Yaml;
    let _csv = Format::Csv;
}

#[test]
fn test_report_arg_clone() {
    let report = ReportArg::PercentVaccinated;
    let cloned = report.clone();
    assert_eq!(cloned.id(), "percent-vaccinated");
}

#[test]
fn test_format_debug() {
    let format = Format::Csv;
    let debug = format!("{:?}", format);
    assert!(debug.contains("Csv"));
}
