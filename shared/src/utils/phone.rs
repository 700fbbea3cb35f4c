//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Digits with optional leading '+', 7 to 15 digits once separators are removed
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{7,15}$").expect("phone regex is valid"));

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is plausible (local or E.164, separators allowed)
pub fn is_valid_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
    allowed && PHONE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Compare two phone numbers the way uniqueness checks do: trimmed, case-insensitive
pub fn phone_numbers_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Mask a phone number for logs (e.g., 090****0001)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("0901-000-0001"), "09010000001");
        assert_eq!(normalize_phone_number("+1 (415) 555-2671"), "+14155552671");
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("0901-000-0001"));
        assert!(is_valid_phone("+14155552671"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("0901-abc-0001"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_phone_numbers_match() {
        assert!(phone_numbers_match("0901-000-0001", " 0901-000-0001 "));
        assert!(!phone_numbers_match("0901-000-0001", "0901-000-0002"));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("0901-000-0001"), "090****0001");
        assert_eq!(mask_phone_number("+14155552671"), "+14****2671");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
