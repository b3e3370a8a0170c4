//! Unit tests for provider wire models

use serde_json::json;

use idv_core::domain::value_objects::{IndividualProfile, PostalAddress};

use crate::provider::models::{IndividualBody, StartRequestBody, TokenResponse};

#[test]
fn test_start_body_field_names() {
    let body = StartRequestBody {
        phone_number: "2001001686",
        ssn: "1234",
        flow_type: "desktop",
        final_target_url: "https://www.example.com",
        allow_otp_retry: true,
        ip_address: "127.0.0.1",
    };

    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({
            "phoneNumber": "2001001686",
            "ssn": "1234",
            "flowType": "desktop",
            "finalTargetUrl": "https://www.example.com",
            "allowOTPRetry": true,
            "ipAddress": "127.0.0.1"
        })
    );
}

#[test]
fn test_individual_maps_post_code_to_postal_code() {
    let profile = IndividualProfile {
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
    };

    let value = serde_json::to_value(IndividualBody::from(&profile)).unwrap();

    assert_eq!(value["firstName"], "Tod");
    assert_eq!(value["emailAddresses"][0], "tweedall@example.com");
    assert_eq!(value["addresses"][0]["postalCode"], "78285");
    assert!(value["addresses"][0].get("postCode").is_none());
}

#[test]
fn test_token_response_requires_token_and_lifetime() {
    let full: TokenResponse =
        serde_json::from_value(json!({"access_token": "abc", "expires_in": 3600, "token_type": "Bearer"}))
            .unwrap();
    let grant = full.into_grant().unwrap();
    assert_eq!(grant.access_token, "abc");
    assert_eq!(grant.expires_in, 3600);

    let missing: TokenResponse = serde_json::from_value(json!({"expires_in": 3600})).unwrap();
    assert!(missing.into_grant().is_none());

    let empty: TokenResponse =
        serde_json::from_value(json!({"access_token": "", "expires_in": 3600})).unwrap();
    assert!(empty.into_grant().is_none());
}
