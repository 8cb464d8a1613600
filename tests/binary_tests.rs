//! Integration tests for the covid-data-analyzer binary.

use std::io::Write;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    cargo_bin_cmd!("covid-data-analyzer")
}

const DEATHS_HEADER: &str =
    "location,date,continent,population,total_cases,new_cases,total_deaths,new_deaths";

fn csv_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

fn clean_deaths() -> NamedTempFile {
    csv_file(&[
        DEATHS_HEADER,
        "Testland,2021-01-01,Oceania,1000,200,20,10,1",
        "Testland,2021-01-02,Oceania,1000,250,50,12,2",
    ])
}

fn clean_vaccinations() -> NamedTempFile {
    csv_file(&[
        "location,date,new_vaccinations",
        "Testland,2021-01-01,100",
        "Testland,2021-01-02,",
    ])
}

#[test]
fn test_report_success() {
    let deaths = clean_deaths();
    let vaccinations = clean_vaccinations();

    cmd()
        .args([
            "report",
            "-d",
            deaths.path().to_str().unwrap(),
            "-x",
            vaccinations.path().to_str().unwrap(),
            "--no-color"
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Death percentage"))
        .stdout(predicate::str::contains("Testland"));
}

#[test]
fn test_report_selected_json() {
    let deaths = clean_deaths();
    let vaccinations = clean_vaccinations();

    cmd()
        .args([
            "report",
            "-d",
            deaths.path().to_str().unwrap(),
            "-x",
            vaccinations.path().to_str().unwrap(),
            "-r",
            "percent-vaccinated",
            "-f",
            "json",
            "--no-color"
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("percent-vaccinated"));
}

#[test]
fn test_report_csv_export() {
    let deaths = clean_deaths();
    let vaccinations = clean_vaccinations();

    cmd()
        .args([
            "report",
            "-d",
            deaths.path().to_str().unwrap(),
            "-x",
            vaccinations.path().to_str().unwrap(),
            "-r",
            "rolling-vaccinations",
            "-f",
            "csv",
            "--no-color"
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# rolling-vaccinations"))
        .stdout(predicate::str::contains("Testland,2021-01-01"));
}

#[test]
fn test_report_verbose_summary() {
    let deaths = clean_deaths();
    let vaccinations = clean_vaccinations();

    cmd()
        .args([
            "report",
            "-d",
            deaths.path().to_str().unwrap(),
            "-x",
            vaccinations.path().to_str().unwrap(),
            "--verbose",
            "--no-color"
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset:"));
}

#[test]
fn test_report_quality_warnings_exit_code() {
    let deaths = csv_file(&[
        DEATHS_HEADER,
        "Testland,2021-01-01,Oceania,1000,20,200,10,1",
    ]);
    let vaccinations = clean_vaccinations();

    cmd()
        .args([
            "report",
            "-d",
            deaths.path().to_str().unwrap(),
            "-x",
            vaccinations.path().to_str().unwrap(),
            "--no-color"
        ])
        .assert()
        .code(1);
}

#[test]
fn test_report_file_not_found() {
    cmd()
        .args([
            "report",
            "-d",
            "/nonexistent/deaths.csv",
            "-x",
            "/nonexistent/vaccinations.csv"
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_report_malformed_csv() {
    let deaths = csv_file(&[
        DEATHS_HEADER,
        "Testland,2021-01-01,Oceania,1000,not-a-number,20,10,1",
    ]);
    let vaccinations = clean_vaccinations();

    cmd()
        .args([
            "report",
            "-d",
            deaths.path().to_str().unwrap(),
            "-x",
            vaccinations.path().to_str().unwrap()
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CSV parse error"));
}

#[test]
fn test_fetch_requires_target() {
    cmd()
        .args(["fetch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
