// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use covid_data_analyzer::error::{
    config_error, dataset_error, download_error, file_read_error, file_write_error
};

#[test]
fn test_file_read_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = file_read_error("/path/to/deaths.csv", io_error);
    let msg = error.to_string();
    assert!(!msg.is_empty());
}

#[test]
fn test_file_write_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = file_write_error("/path/to/out.csv", io_error);
    let _msg = error.to_string();
}

#[test]
fn test_dataset_error() {
    let error = dataset_error("empty deaths table");
    let _msg = error.to_string();
}

#[test]
fn test_download_error() {
    let error = download_error("Download failed with 503");
    let _msg = error.to_string();
}

#[test]
fn test_config_error() {
    let error = config_error("Invalid configuration value");
    let _msg = error.to_string();
}

#[test]
fn test_error_types_are_different() {
    let dataset_err = dataset_error("test");
    let download_err = download_error("test");
    let config_err = config_error("test");
    assert!(!dataset_err.to_string().is_empty());
    assert!(!download_err.to_string().is_empty());
    assert!(!config_err.to_string().is_empty());
}
