use std::sync::Arc;

use idv_core::domain::entities::{VerificationStep, CORRELATION_ID_KEY};
use idv_core::domain::value_objects::{IndividualProfile, PostalAddress};

use super::fakes::{FakeApi, FakeAuthenticator};
use crate::auth::AuthStrategy;
use crate::error::ClientError;
use crate::flow::VerificationFlow;
use crate::session::{MemorySessionStore, SessionStore};

const DESKTOP: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15";
const MOBILE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";

type Flow = VerificationFlow<Arc<FakeApi>, Arc<FakeAuthenticator>, Arc<MemorySessionStore>>;

fn build_flow(
    api: FakeApi,
    authenticator: FakeAuthenticator,
    store: MemorySessionStore,
    user_agent: &str,
) -> (Flow, Arc<FakeApi>, Arc<FakeAuthenticator>, Arc<MemorySessionStore>) {
    let api = Arc::new(api);
    let authenticator = Arc::new(authenticator);
    let store = Arc::new(store);
    let flow = VerificationFlow::new(
        Arc::clone(&api),
        Arc::clone(&authenticator),
        Arc::clone(&store),
        user_agent,
    );
    (flow, api, authenticator, store)
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
async fn test_happy_path_reaches_success() {
    let (mut flow, api, authenticator, store) = build_flow(
        FakeApi::default(),
        FakeAuthenticator::default(),
        MemorySessionStore::new(),
        DESKTOP,
    );
    assert_eq!(flow.current_step(), VerificationStep::Phone);

    let validation = flow.submit_phone("(200) 100-1686", "1234").await.unwrap();
    assert!(validation.success);
    assert_eq!(flow.current_step(), VerificationStep::PersonalInfo);
    assert_eq!(flow.correlation_id(), Some("corr-1"));
    assert_eq!(store.get(CORRELATION_ID_KEY).as_deref(), Some("corr-1"));

    // Digits only, flow type from the strategy
    assert_eq!(
        api.started.lock().unwrap()[0],
        ("2001001686".to_string(), "1234".to_string(), "desktop".to_string())
    );
    assert_eq!(
        authenticator.calls.lock().unwrap()[0],
        ("widget-token".to_string(), AuthStrategy::DesktopOtpFallback)
    );
    assert_eq!(*api.validated.lock().unwrap(), vec!["corr-1".to_string()]);

    let completion = flow.submit_personal_info(individual()).await.unwrap();
    assert!(completion.success);
    assert_eq!(flow.current_step(), VerificationStep::Success);
    assert!(flow.session().is_complete());
    assert!(store.get(CORRELATION_ID_KEY).is_none());
}

#[tokio::test]
async fn test_mobile_uses_link_fallback() {
    let (mut flow, api, authenticator, _) = build_flow(
        FakeApi::default(),
        FakeAuthenticator::default(),
        MemorySessionStore::new(),
        MOBILE,
    );
    assert_eq!(flow.strategy(), AuthStrategy::MobileLinkFallback);

    flow.submit_phone("2001001686", "1234").await.unwrap();

    assert_eq!(api.started.lock().unwrap()[0].2, "mobile");
    assert_eq!(
        authenticator.calls.lock().unwrap()[0].1,
        AuthStrategy::MobileLinkFallback
    );
}

#[tokio::test]
async fn test_widget_failure_returns_to_phone_step() {
    let authenticator = FakeAuthenticator {
        fail: true,
        ..Default::default()
    };
    let (mut flow, api, _, store) = build_flow(
        FakeApi::default(),
        authenticator,
        MemorySessionStore::new(),
        DESKTOP,
    );

    let err = flow.submit_phone("2001001686", "1234").await.unwrap_err();

    assert!(matches!(err, ClientError::Authentication(_)));
    assert_eq!(flow.current_step(), VerificationStep::Phone);
    assert!(api.validated.lock().unwrap().is_empty());
    // The correlation id survives for a resubmission
    assert_eq!(store.get(CORRELATION_ID_KEY).as_deref(), Some("corr-1"));
}

#[tokio::test]
async fn test_rejected_validation_stays_on_authenticate() {
    let api = FakeApi {
        reject_validate: true,
        ..Default::default()
    };
    let (mut flow, _, _, _) = build_flow(api, FakeAuthenticator::default(), MemorySessionStore::new(), DESKTOP);

    let err = flow.submit_phone("2001001686", "1234").await.unwrap_err();

    match err {
        ClientError::Rejected(reason) => assert_eq!(reason, "Phone validation failed"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(flow.current_step(), VerificationStep::Authenticate);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_the_server() {
    let (mut flow, api, _, store) = build_flow(
        FakeApi::default(),
        FakeAuthenticator::default(),
        MemorySessionStore::new(),
        DESKTOP,
    );

    let err = flow.submit_phone("2001001686", "12").await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert!(api.started.lock().unwrap().is_empty());
    assert!(store.is_empty());
    assert_eq!(flow.current_step(), VerificationStep::Phone);
}

#[tokio::test]
async fn test_start_failure_keeps_phone_step() {
    let api = FakeApi {
        fail_start: true,
        ..Default::default()
    };
    let (mut flow, _, authenticator, store) =
        build_flow(api, FakeAuthenticator::default(), MemorySessionStore::new(), DESKTOP);

    let err = flow.submit_phone("2001001686", "1234").await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert_eq!(flow.current_step(), VerificationStep::Phone);
    assert!(authenticator.calls.lock().unwrap().is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_reload_restores_correlation_id_but_not_step() {
    let store = MemorySessionStore::with_entry(CORRELATION_ID_KEY, "corr-restored");
    let (mut flow, api, _, _) = build_flow(FakeApi::default(), FakeAuthenticator::default(), store, DESKTOP);

    assert_eq!(flow.correlation_id(), Some("corr-restored"));
    assert_eq!(flow.current_step(), VerificationStep::Phone);

    flow.submit_personal_info(individual()).await.unwrap();
    assert_eq!(*api.completed.lock().unwrap(), vec!["corr-restored".to_string()]);
}

#[tokio::test]
async fn test_complete_without_session_fails() {
    let (mut flow, api, _, _) = build_flow(
        FakeApi::default(),
        FakeAuthenticator::default(),
        MemorySessionStore::new(),
        DESKTOP,
    );

    let err = flow.submit_personal_info(individual()).await.unwrap_err();

    assert!(matches!(err, ClientError::MissingSession));
    assert!(api.completed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_completion_keeps_session() {
    let api = FakeApi {
        reject_complete: true,
        ..Default::default()
    };
    let (mut flow, _, _, store) = build_flow(api, FakeAuthenticator::default(), MemorySessionStore::new(), DESKTOP);
    flow.submit_phone("2001001686", "1234").await.unwrap();

    let err = flow.submit_personal_info(individual()).await.unwrap_err();

    assert!(matches!(err, ClientError::Rejected(_)));
    assert_eq!(flow.current_step(), VerificationStep::PersonalInfo);
    assert_eq!(store.get(CORRELATION_ID_KEY).as_deref(), Some("corr-1"));
}

#[tokio::test]
async fn test_reset_clears_memory_and_storage() {
    let (mut flow, _, _, store) = build_flow(
        FakeApi::default(),
        FakeAuthenticator::default(),
        MemorySessionStore::new(),
        DESKTOP,
    );
    flow.submit_phone("2001001686", "1234").await.unwrap();

    flow.reset();

    assert_eq!(flow.current_step(), VerificationStep::Phone);
    assert!(flow.correlation_id().is_none());
    assert!(flow.session().auth_token.is_none());
    assert!(store.get(CORRELATION_ID_KEY).is_none());
}
