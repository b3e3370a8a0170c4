use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use idv_core::domain::value_objects::{IndividualProfile, PostalAddress};
use idv_shared::utils::{is_present, is_ssn_last_four, is_valid_phone};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StartVerificationDto {
    /// Digits with an optional leading `+`; spaces, dashes, dots and parentheses are tolerated
    #[serde(default)]
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    /// Exactly four digits
    #[serde(default, rename = "lastFourSSN")]
    #[validate(custom(function = "validate_last_four_ssn"))]
    pub last_four_ssn: String,

    /// `mobile` or `desktop`
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub flow_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValidateVerificationDto {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub correlation_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompleteVerificationDto {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub correlation_id: String,

    #[serde(default)]
    #[validate(nested)]
    pub individual: IndividualDto,
}

/// Accepts camelCase keys and the snake_case spelling the browser form sends
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IndividualDto {
    #[serde(default, alias = "first_name")]
    #[validate(custom(function = "validate_required"))]
    pub first_name: String,

    #[serde(default, alias = "last_name")]
    #[validate(custom(function = "validate_required"))]
    pub last_name: String,

    #[serde(default, alias = "email_addresses")]
    #[validate(custom(function = "validate_email_list"))]
    pub email_addresses: Vec<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "At least one address is required."), nested)]
    pub addresses: Vec<AddressDto>,

    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub dob: String,

    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub ssn: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub address: String,

    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub city: String,

    #[serde(default, alias = "post_code")]
    #[validate(custom(function = "validate_required"))]
    pub post_code: String,
}

impl From<IndividualDto> for IndividualProfile {
    fn from(dto: IndividualDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email_addresses: dto.email_addresses,
            addresses: dto.addresses.into_iter().map(PostalAddress::from).collect(),
            dob: dto.dob,
            ssn: dto.ssn,
        }
    }
}

impl From<AddressDto> for PostalAddress {
    fn from(dto: AddressDto) -> Self {
        Self {
            address: dto.address,
            city: dto.city,
            post_code: dto.post_code,
        }
    }
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if is_present(value) {
        Ok(())
    } else {
        Err(error("required", "This field is required."))
    }
}

fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if is_valid_phone(value) {
        Ok(())
    } else {
        Err(error("phone", "This field is not a valid phone number."))
    }
}

fn validate_last_four_ssn(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if is_ssn_last_four(value) {
        Ok(())
    } else {
        Err(error("length", "Must be exactly 4 digits."))
    }
}

fn validate_email_list(values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(error("required", "At least one email address is required."));
    }
    if values.iter().any(|v| !is_present(v)) {
        return Err(error("required", "Email addresses must not be empty."));
    }
    Ok(())
}
