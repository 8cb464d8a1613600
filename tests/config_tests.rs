use covid_data_analyzer::config::{Config, ReportsConfig};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.data.deaths.is_none());
    assert!(config.data.vaccinations.is_none());
    assert!(config.reports.disabled.is_empty());
}

#[test]
fn test_default_retry_config() {
    let config = Config::default();

    assert_eq!(config.retry.max_retries, 3);
    assert_eq!(config.retry.initial_delay_ms, 1000);
    assert_eq!(config.retry.backoff_factor, 2.0);
}

#[test]
fn test_default_fetch_urls() {
    let config = Config::default();

    assert!(config.fetch.deaths_url.unwrap().starts_with("https://"));
    assert!(config.fetch.vaccinations_url.unwrap().contains("vaccinations"));
}

#[test]
fn test_reports_config_with_disabled() {
    let config = ReportsConfig {
        disabled: vec!["death-rate".to_string(), "global-totals".to_string()]
    };

    assert_eq!(config.disabled.len(), 2);
    assert!(config.disabled.contains(&"death-rate".to_string()));
}
