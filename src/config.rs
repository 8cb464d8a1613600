//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.covid-analyzer.toml` in current directory
//! 4. `~/.config/covid-analyzer/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [data]
//! deaths = "data/covid_deaths.csv"
//! vaccinations = "data/covid_vaccinations.csv"
//!
//! [fetch]
//! deaths_url = "https://covid.ourworldindata.org/data/jhu/full_data.csv"
//! vaccinations_url = "https://covid.ourworldindata.org/data/vaccinations/vaccinations.csv"
//!
//! [retry]
//! max_retries = 3
//! initial_delay_ms = 1000
//! max_delay_ms = 30000
//! backoff_factor = 2.0
//!
//! [reports]
//! disabled = ["infection-peaks"]
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `COVID_DEATHS_PATH` | Path to the deaths CSV |
//! | `COVID_VACCINATIONS_PATH` | Path to the vaccinations CSV |
//! | `COVID_DEATHS_URL` | Download URL for the deaths CSV |
//! | `COVID_VACCINATIONS_URL` | Download URL for the vaccinations CSV |

use std::{env, fs, path::PathBuf};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data:    DataConfig,
    #[serde(default)]
    pub fetch:   FetchConfig,
    #[serde(default)]
    pub retry:   RetryConfig,
    #[serde(default)]
    pub reports: ReportsConfig
}

/// Default dataset locations
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DataConfig {
    pub deaths:       Option<PathBuf>,
    pub vaccinations: Option<PathBuf>
}

/// Reports configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReportsConfig {
    /// Disabled report IDs
    #[serde(default)]
    pub disabled: Vec<String>
}

/// Remote dataset sources
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    pub deaths_url:       Option<String>,
    pub vaccinations_url: Option<String>
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            deaths_url:       Some(String::from(
                "https://covid.ourworldindata.org/data/jhu/full_data.csv"
            )),
            vaccinations_url: Some(String::from(
                "https://covid.ourworldindata.org/data/vaccinations/vaccinations.csv"
            ))
        }
    }
}

/// Retry configuration for dataset downloads
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    pub max_retries:      u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms:     u64,
    pub backoff_factor:   f64
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries:      3,
            initial_delay_ms: 1000,
            max_delay_ms:     30000,
            backoff_factor:   2.0
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.covid-analyzer.toml)
    /// 3. Config file in home directory (~/.config/covid-analyzer/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        // Try to load from home directory config
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("covid-analyzer")
                .join("config.toml");

            if home_config.exists() {
                let content = fs::read_to_string(&home_config)
                    .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
                config = toml::from_str(&content)
                    .map_err(|e| config_error(format!("Invalid config file: {}", e)))?;
            }
        }

        // Try to load from current directory config (overrides home config)
        let local_config = PathBuf::from(".covid-analyzer.toml");
        if local_config.exists() {
            let content = fs::read_to_string(&local_config)
                .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
            config = toml::from_str(&content)
                .map_err(|e| config_error(format!("Invalid config file: {}", e)))?;
        }

        // Override with environment variables
        if let Ok(path) = env::var("COVID_DEATHS_PATH") {
            config.data.deaths = Some(PathBuf::from(path));
        }

        if let Ok(path) = env::var("COVID_VACCINATIONS_PATH") {
            config.data.vaccinations = Some(PathBuf::from(path));
        }

        if let Ok(url) = env::var("COVID_DEATHS_URL") {
            config.fetch.deaths_url = Some(url);
        }

        if let Ok(url) = env::var("COVID_VACCINATIONS_URL") {
            config.fetch.vaccinations_url = Some(url);
        }

        Ok(config)
    }
}
