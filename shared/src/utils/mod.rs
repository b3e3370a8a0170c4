//! Utility functions module

pub mod phone;
pub mod validation;

pub use phone::{digits_only, is_valid_phone, mask_phone_number, normalize_phone_number};
pub use validation::{all_present, is_present, is_ssn_last_four, SSN_LAST_FOUR_LENGTH};
