//! Validated request value objects for the three verification operations.
//!
//! Each request can only be built through its constructor, which enforces the
//! field rules. Once built, a request is immutable.

use idv_shared::utils::{all_present, is_present, is_ssn_last_four, is_valid_phone};
use idv_shared::utils::SSN_LAST_FOUR_LENGTH;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Inputs for starting a verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartVerificationRequest {
    phone_number: String,
    ssn_last_four: String,
    flow_type: String,
}

impl StartVerificationRequest {
    /// Validate and build a start request
    ///
    /// # Errors
    ///
    /// * `InvalidFormat` on `PhoneNumber` if the number is not a syntactically valid phone value
    /// * `InvalidLength` / `InvalidFormat` on `LastFourSSN` unless it is exactly 4 digits
    /// * `RequiredField` on `FlowType` if it is blank
    pub fn new(
        phone_number: impl Into<String>,
        ssn_last_four: impl Into<String>,
        flow_type: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let phone_number = phone_number.into();
        let ssn_last_four = ssn_last_four.into();
        let flow_type = flow_type.into();

        if !is_present(&phone_number) {
            return Err(ValidationError::required("PhoneNumber"));
        }
        if !is_valid_phone(&phone_number) {
            return Err(ValidationError::invalid_format("PhoneNumber"));
        }
        if ssn_last_four.chars().count() != SSN_LAST_FOUR_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: "LastFourSSN".to_string(),
                expected: SSN_LAST_FOUR_LENGTH,
                actual: ssn_last_four.chars().count(),
            });
        }
        if !is_ssn_last_four(&ssn_last_four) {
            return Err(ValidationError::invalid_format("LastFourSSN"));
        }
        if !is_present(&flow_type) {
            return Err(ValidationError::required("FlowType"));
        }

        Ok(Self {
            phone_number: phone_number.trim().to_string(),
            ssn_last_four,
            flow_type: flow_type.trim().to_string(),
        })
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn ssn_last_four(&self) -> &str {
        &self.ssn_last_four
    }

    pub fn flow_type(&self) -> &str {
        &self.flow_type
    }
}

/// Inputs for validating the phone after the authentication step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateVerificationRequest {
    correlation_id: String,
}

impl ValidateVerificationRequest {
    pub fn new(correlation_id: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            correlation_id: required_correlation_id(correlation_id.into())?,
        })
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }
}

/// Inputs for the final identity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteVerificationRequest {
    correlation_id: String,
    individual: IndividualProfile,
}

impl CompleteVerificationRequest {
    pub fn new(
        correlation_id: impl Into<String>,
        individual: IndividualProfile,
    ) -> Result<Self, ValidationError> {
        let correlation_id = required_correlation_id(correlation_id.into())?;
        individual.validate()?;
        Ok(Self {
            correlation_id,
            individual,
        })
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn individual(&self) -> &IndividualProfile {
        &self.individual
    }
}

fn required_correlation_id(value: String) -> Result<String, ValidationError> {
    if !is_present(&value) {
        return Err(ValidationError::required("CorrelationId"));
    }
    Ok(value.trim().to_string())
}

/// Personal details submitted on the last step
///
/// Accepts camelCase keys and the snake_case spelling the browser form uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualProfile {
    #[serde(default, alias = "first_name")]
    pub first_name: String,
    #[serde(default, alias = "last_name")]
    pub last_name: String,
    #[serde(default, alias = "email_addresses")]
    pub email_addresses: Vec<String>,
    #[serde(default)]
    pub addresses: Vec<PostalAddress>,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub ssn: String,
}

impl IndividualProfile {
    /// Check that every required field is filled in
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_present(&self.first_name) {
            return Err(ValidationError::required("Individual.FirstName"));
        }
        if !is_present(&self.last_name) {
            return Err(ValidationError::required("Individual.LastName"));
        }
        if !all_present(&self.email_addresses) {
            return Err(ValidationError::required("Individual.EmailAddresses"));
        }
        if self.addresses.is_empty() {
            return Err(ValidationError::required("Individual.Addresses"));
        }
        for (index, address) in self.addresses.iter().enumerate() {
            address.validate(index)?;
        }
        if !is_present(&self.dob) {
            return Err(ValidationError::required("Individual.Dob"));
        }
        if !is_present(&self.ssn) {
            return Err(ValidationError::required("Individual.Ssn"));
        }
        Ok(())
    }
}

/// One postal address of the individual
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, alias = "post_code")]
    pub post_code: String,
}

impl PostalAddress {
    fn validate(&self, index: usize) -> Result<(), ValidationError> {
        let missing = [
            ("Address", &self.address),
            ("City", &self.city),
            ("PostCode", &self.post_code),
        ]
        .into_iter()
        .find(|(_, value)| !is_present(value));

        match missing {
            Some((name, _)) => Err(ValidationError::RequiredField {
                field: format!("Individual.Addresses[{}].{}", index, name),
            }),
            None => Ok(()),
        }
    }
}
