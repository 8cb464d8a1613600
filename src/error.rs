pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create file write error
pub fn file_write_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write file '{}': {}", path, source))
}

/// Create CSV parse error with the offending line reference when available
pub fn csv_parse_error(path: &str, source: &csv::Error) -> AppError {
    let msg = match source.position() {
        Some(pos) => format!(
            "CSV parse error in '{}' at line {}:\n  {}",
            path,
            pos.line(),
            source
        ),
        None => format!("CSV parse error in '{}':\n  {}", path, source)
    };
    AppError::bad_request(msg)
}

/// Create dataset error for problems beyond a single malformed record
pub fn dataset_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create download error
pub fn download_error(message: impl Into<String>) -> AppError {
    AppError::service(message.into())
}

/// Create HTTP error
pub fn http_error(err: reqwest::Error) -> AppError {
    let msg = if err.is_timeout() {
        format!("Request timeout: {}", err)
    } else if err.is_connect() {
        format!("Connection failed: {}", err)
    } else if err.is_status() {
        format!("HTTP error {}: {}", err.status().unwrap_or_default(), err)
    } else {
        err.to_string()
    };
    AppError::service(msg)
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}
