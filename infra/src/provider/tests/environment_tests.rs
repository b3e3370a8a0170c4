//! Unit tests for server environment selection

use crate::provider::ServerEnvironment;

#[test]
fn test_known_environments() {
    assert_eq!(ServerEnvironment::from_name("uat-us"), ServerEnvironment::UatUs);
    assert_eq!(ServerEnvironment::from_name("prod-us"), ServerEnvironment::ProdUs);
    assert_eq!(ServerEnvironment::from_name("UAT-EU"), ServerEnvironment::UatEu);
    assert_eq!(ServerEnvironment::from_name(" prod-eu "), ServerEnvironment::ProdEu);
}

#[test]
fn test_unknown_environment_falls_back_to_uat_us() {
    assert_eq!(ServerEnvironment::from_name("staging"), ServerEnvironment::UatUs);
    assert_eq!(ServerEnvironment::from_name(""), ServerEnvironment::UatUs);
}

#[test]
fn test_base_urls_are_distinct() {
    let urls: std::collections::HashSet<_> = [
        ServerEnvironment::UatUs,
        ServerEnvironment::ProdUs,
        ServerEnvironment::UatEu,
        ServerEnvironment::ProdEu,
    ]
    .iter()
    .map(|env| env.base_url())
    .collect();
    assert_eq!(urls.len(), 4);
    assert!(urls.iter().all(|url| url.starts_with("https://")));
}

#[test]
fn test_display_round_trips_name() {
    let env = ServerEnvironment::ProdEu;
    assert_eq!(ServerEnvironment::from_name(&env.to_string()), env);
}
