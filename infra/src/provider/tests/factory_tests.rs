//! Unit tests for provider selection

use idv_shared::config::{AppConfig, Environment, ProviderSettings};

use crate::provider::{create_provider, ProveApiClient, ServerEnvironment};
use crate::InfrastructureError;

#[test]
fn test_mock_is_default_in_development() {
    assert!(create_provider(&ProviderSettings::default(), Environment::Development).is_ok());
    assert!(create_provider(&ProviderSettings::default(), Environment::Staging).is_ok());
}

#[test]
fn test_mock_is_refused_in_production() {
    let config = AppConfig {
        environment: Environment::Production,
        ..AppConfig::default()
    };
    match create_provider(&config.provider, config.environment) {
        Err(InfrastructureError::Config(message)) => assert!(message.contains("production")),
        Err(other) => panic!("Expected config error, got {:?}", other),
        Ok(_) => panic!("Mock provider must not be created in production"),
    }
}

#[test]
fn test_remote_allowed_in_production() {
    let settings = ProviderSettings::new("id", "secret", "prod-us");
    assert!(create_provider(&settings, Environment::Production).is_ok());
}

#[test]
fn test_remote_requires_credentials() {
    let settings = ProviderSettings::new("", "", "uat-us");
    match create_provider(&settings, Environment::Development) {
        Err(InfrastructureError::Config(message)) => assert!(message.contains("PROVIDER_CLIENT_ID")),
        Err(other) => panic!("Expected config error, got {:?}", other),
        Ok(_) => panic!("Expected config error"),
    }
}

#[test]
fn test_remote_with_credentials() {
    let settings = ProviderSettings::new("id", "secret", "prod-eu");
    assert!(create_provider(&settings, Environment::Development).is_ok());
}

#[test]
fn test_base_url_override_wins() {
    let settings =
        ProviderSettings::new("id", "secret", "prod-us").with_base_url("http://127.0.0.1:9999/");
    let client = ProveApiClient::from_settings(&settings).unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:9999");
}

#[test]
fn test_environment_selects_base_url() {
    let settings = ProviderSettings::new("id", "secret", "uat-eu");
    let client = ProveApiClient::from_settings(&settings).unwrap();
    assert_eq!(client.base_url(), ServerEnvironment::UatEu.base_url());
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let settings = ProviderSettings::new("id", "secret", "uat-us").with_base_url("not a url");
    assert!(matches!(
        ProveApiClient::from_settings(&settings),
        Err(InfrastructureError::Config(_))
    ));
}
