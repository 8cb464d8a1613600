// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;
use covid_data_analyzer::{
    dataset::{Dataset, DeathsRow, QualityIssue},
    output::{OutputFormat, OutputOptions, format_quality_issues, format_reports},
    reports::{ReportResult, ReportRunner}
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_results() -> Vec<ReportResult> {
    let mut row = DeathsRow::new("Testland", date(2021, 1, 1));
    row.continent = Some("Oceania".into());
    row.population = Some(1000);
    row.total_cases = Some(200);
    row.total_deaths = Some(10);
    let data = Dataset {
        deaths:       vec![row],
        vaccinations: Vec::new()
    };
    ReportRunner::new().run_selected(&data, &["death-rate".to_string()])
}

#[test]
fn test_output_format_default() {
    let format = OutputFormat::default();
    assert!(matches!(format, OutputFormat::Text));
}

#[test]
fn test_output_options_default() {
    let opts = OutputOptions::default();
    assert!(matches!(opts.format, OutputFormat::Text));
    assert!(opts.colored);
    assert!(!opts.verbose);
}

#[test]
fn test_format_reports_text() {
    let results = sample_results();
    let opts = OutputOptions {
        format:  OutputFormat::Text,
        colored: false,
        verbose: false
    };
    let output = format_reports(&results, &opts);

    assert!(output.contains("=== Death percentage by location and date ==="));
    assert!(output.contains("Testland"));
    assert!(output.contains("5.0000"));
}

#[test]
fn test_format_reports_text_verbose() {
    let results = sample_results();
    let opts = OutputOptions {
        format:  OutputFormat::Text,
        colored: false,
        verbose: true
    };
    let output = format_reports(&results, &opts);

    assert!(output.contains("Rows: 1"));
    assert!(output.contains("Category: Mortality"));
}

#[test]
fn test_format_reports_json() {
    let results = sample_results();
    let opts = OutputOptions {
        format:  OutputFormat::Json,
        colored: false,
        verbose: false
    };
    let output = format_reports(&results, &opts);

    assert!(output.starts_with('['));
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed[0]["id"], "death-rate");
}

#[test]
fn test_format_reports_yaml() {
    let results = sample_results();
    let opts = OutputOptions {
        format:  OutputFormat::Yaml,
        colored: false,
        verbose: false
    };
    let output = format_reports(&results, &opts);

    assert!(output.contains("id: death-rate"));
    assert!(output.contains("Testland"));
}

#[test]
fn test_format_reports_csv() {
    let results = sample_results();
    let opts = OutputOptions {
        format:  OutputFormat::Csv,
        colored: false,
        verbose: false
    };
    let output = format_reports(&results, &opts);

    assert!(output.starts_with("# death-rate\n"));
    assert!(output.contains("location,date,total_cases,total_deaths,death_rate_pct"));
    assert!(output.contains("Testland,2021-01-01,200,10,5.0000"));
}

#[test]
fn test_format_reports_empty_table() {
    let data = Dataset::default();
    let results = ReportRunner::new().run_selected(&data, &["death-rate".to_string()]);
    let opts = OutputOptions {
        format:  OutputFormat::Text,
        colored: false,
        verbose: false
    };
    let output = format_reports(&results, &opts);

    assert!(output.contains("(no rows)"));
}

#[test]
fn test_format_quality_issues() {
    let issues = vec![QualityIssue {
        location: "Testland".into(),
        date:     date(2021, 1, 1),
        message:  "negative new_deaths: -5".to_string()
    }];
    let opts = OutputOptions {
        format:  OutputFormat::Text,
        colored: false,
        verbose: false
    };
    let output = format_quality_issues(&issues, &opts);

    assert!(output.contains("Data quality warnings (1):"));
    assert!(output.contains("Testland 2021-01-01: negative new_deaths: -5"));
}
