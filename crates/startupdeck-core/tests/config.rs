use std::time::Duration;

use startupdeck_core::{ApiConfig, Environment, DEFAULT_TIMEOUT};

#[test]
fn environments_have_distinct_urls() {
    assert!(Environment::Development.base_url().contains("localhost"));
    assert!(Environment::Staging.base_url().contains("staging"));
    assert_eq!(
        Environment::Production.base_url(),
        "https://api.startupdeck.app/v1"
    );
    assert_eq!(
        Environment::Production.storage_url(),
        "https://api.startupdeck.app/storage"
    );
}

#[test]
fn default_config_targets_production() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, Environment::Production.base_url());
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
}

#[test]
fn config_builder_pattern() {
    let config = ApiConfig::new(Environment::Development)
        .with_base_url("http://127.0.0.1:9999/api/v1")
        .with_timeout(Duration::from_secs(5));
    assert_eq!(config.base_url, "http://127.0.0.1:9999/api/v1");
    assert_eq!(config.storage_url, Environment::Development.storage_url());
    assert_eq!(config.timeout, Duration::from_secs(5));
}
