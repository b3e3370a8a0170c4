//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Characters a user may type while entering a phone number
static PHONE_CHARSET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().\-]+$").expect("valid phone charset regex"));

// Normalized form: optional leading '+', then 7 to 15 digits
static NORMALIZED_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{7,15}$").expect("valid phone regex"));

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Keep only the digits of a phone number, dropping any '+' as well
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Check whether a phone number is syntactically valid
///
/// Accepts an optional leading '+', digits and the separators
/// `space ( ) . -`. After normalization 7 to 15 digits must remain.
pub fn is_valid_phone(phone: &str) -> bool {
    let trimmed = phone.trim();
    if !PHONE_CHARSET_REGEX.is_match(trimmed) {
        return false;
    }
    NORMALIZED_PHONE_REGEX.is_match(&normalize_phone_number(trimmed))
}

/// Mask a phone number for logs (e.g., 555****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
