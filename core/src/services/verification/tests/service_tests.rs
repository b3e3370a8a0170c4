//! Unit tests for verification service

use std::error::Error;
use std::sync::Arc;

use crate::domain::value_objects::{
    CompleteVerificationRequest, IndividualProfile, PostalAddress, ProviderOutcome,
    StartVerificationRequest, StartVerificationResult, ValidateVerificationRequest,
};
use crate::errors::{DomainError, ProviderError};
use crate::services::token::{TokenCache, TokenCacheConfig};
use crate::services::verification::{
    MockVerificationProvider, RecordedCall, VerificationService, COMPLETION_FAILED_MESSAGE,
    START_FAILED_MESSAGE, VALIDATION_FAILED_MESSAGE,
};

type Service = VerificationService<MockVerificationProvider>;

fn build_service(provider: MockVerificationProvider) -> (Arc<MockVerificationProvider>, Service) {
    let provider = Arc::new(provider);
    let cache = Arc::new(TokenCache::new(
        provider.clone(),
        TokenCacheConfig::new("client-id", "client-secret"),
    ));
    (provider.clone(), VerificationService::new(provider, cache))
}

fn start_request() -> StartVerificationRequest {
    StartVerificationRequest::new("2001001686", "1234", "desktop").unwrap()
}

fn individual() -> IndividualProfile {
    IndividualProfile {
        first_name: "Tod".to_string(),
        last_name: "Weedall".to_string(),
        email_addresses: vec!["tweedall@example.com".to_string()],
        addresses: vec![PostalAddress {
            address: "39 South Trail".to_string(),
            city: "San Antonio".to_string(),
            post_code: "78285".to_string(),
        }],
        dob: "1984-12-10".to_string(),
        ssn: "565228370".to_string(),
    }
}

#[tokio::test]
async fn test_start_verification_success() {
    let (provider, service) = build_service(MockVerificationProvider::new().with_start_result(
        StartVerificationResult {
            auth_token: "auth-abc".to_string(),
            correlation_id: "corr-123".to_string(),
        },
    ));

    let result = service.start_verification(start_request()).await.unwrap();

    assert_eq!(result.auth_token, "auth-abc");
    assert_eq!(result.correlation_id, "corr-123");
    assert_eq!(
        provider.calls(),
        vec![
            RecordedCall::Token,
            RecordedCall::Start {
                phone_number: "2001001686".to_string(),
                flow_type: "desktop".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_token_is_shared_across_operations() {
    let (provider, service) = build_service(MockVerificationProvider::new());

    let started = service.start_verification(start_request()).await.unwrap();
    let validate = ValidateVerificationRequest::new(started.correlation_id.clone()).unwrap();
    service.validate_phone(validate).await.unwrap();
    let complete = CompleteVerificationRequest::new(started.correlation_id, individual()).unwrap();
    service.complete_verification(complete).await.unwrap();

    assert_eq!(provider.token_requests(), 1);
}

#[tokio::test]
async fn test_identical_starts_get_distinct_correlation_ids() {
    let (_, service) = build_service(MockVerificationProvider::new());

    let first = service.start_verification(start_request()).await.unwrap();
    let second = service.start_verification(start_request()).await.unwrap();

    assert_ne!(first.correlation_id, second.correlation_id);
}

#[tokio::test]
async fn test_start_failure_is_wrapped() {
    let mut provider = MockVerificationProvider::new();
    provider.fail_start = true;
    let (_, service) = build_service(provider);

    let err = service.start_verification(start_request()).await.unwrap_err();

    assert_eq!(err.to_string(), START_FAILED_MESSAGE);
    match &err {
        DomainError::Application { source, .. } => {
            assert!(matches!(source, ProviderError::Verification { .. }));
        }
        other => panic!("Expected application error, got {:?}", other),
    }
    assert!(err.source().is_some());
}

#[tokio::test]
async fn test_token_failure_surfaces_as_authentication_cause() {
    let mut provider = MockVerificationProvider::new();
    provider.fail_token = true;
    let (provider, service) = build_service(provider);

    let err = service.start_verification(start_request()).await.unwrap_err();

    match err {
        DomainError::Application { message, source } => {
            assert_eq!(message, START_FAILED_MESSAGE);
            assert!(matches!(source, ProviderError::Authentication { .. }));
        }
        other => panic!("Expected application error, got {:?}", other),
    }
    // No start call without a token
    assert_eq!(provider.calls(), vec![RecordedCall::Token]);
}

#[tokio::test]
async fn test_validate_rejected_is_not_an_error() {
    let mut provider = MockVerificationProvider::new();
    provider.reject_validate = true;
    let (_, service) = build_service(provider);

    let outcome = service
        .validate_phone(ValidateVerificationRequest::new("corr-123").unwrap())
        .await
        .unwrap();

    assert_eq!(outcome, ProviderOutcome::rejected(VALIDATION_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_validate_accepted_passes_payload_through() {
    let (provider, service) = build_service(MockVerificationProvider::new());

    let outcome = service
        .validate_phone(ValidateVerificationRequest::new("corr-123").unwrap())
        .await
        .unwrap();

    let data = outcome.into_accepted().unwrap();
    assert!(data.success);
    assert!(provider.calls().contains(&RecordedCall::Validate {
        correlation_id: "corr-123".to_string()
    }));
}

#[tokio::test]
async fn test_validate_failure_is_wrapped() {
    let mut provider = MockVerificationProvider::new();
    provider.fail_validate = true;
    let (_, service) = build_service(provider);

    let err = service
        .validate_phone(ValidateVerificationRequest::new("corr-123").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), VALIDATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_complete_outcomes() {
    let (provider, service) = build_service(MockVerificationProvider::new());
    let request = CompleteVerificationRequest::new("corr-123", individual()).unwrap();

    let outcome = service.complete_verification(request).await.unwrap();
    assert!(outcome.is_accepted());
    assert!(provider.calls().contains(&RecordedCall::Complete {
        correlation_id: "corr-123".to_string(),
        first_name: "Tod".to_string(),
    }));

    let mut rejecting = MockVerificationProvider::new();
    rejecting.reject_complete = true;
    let (_, service) = build_service(rejecting);
    let request = CompleteVerificationRequest::new("corr-123", individual()).unwrap();
    let outcome = service.complete_verification(request).await.unwrap();
    assert_eq!(outcome, ProviderOutcome::rejected(COMPLETION_FAILED_MESSAGE));

    let mut failing = MockVerificationProvider::new();
    failing.fail_complete = true;
    let (_, service) = build_service(failing);
    let request = CompleteVerificationRequest::new("corr-123", individual()).unwrap();
    let err = service.complete_verification(request).await.unwrap_err();
    assert_eq!(err.to_string(), COMPLETION_FAILED_MESSAGE);
}
