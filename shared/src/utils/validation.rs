//! Field validation helpers shared by the API DTOs and the domain value objects

/// Length of the SSN suffix collected at the start of a verification
pub const SSN_LAST_FOUR_LENGTH: usize = 4;

/// Check that a value is exactly four ASCII digits
pub fn is_ssn_last_four(value: &str) -> bool {
    value.len() == SSN_LAST_FOUR_LENGTH && value.chars().all(|c| c.is_ascii_digit())
}

/// Check that a value contains something other than whitespace
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check that a list is non-empty and that none of its entries are blank
pub fn all_present(values: &[String]) -> bool {
    !values.is_empty() && values.iter().all(|v| is_present(v))
}
