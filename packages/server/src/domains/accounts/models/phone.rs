use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Optional leading plus, then 10 to 15 decimal digits (any script)
    static ref PHONE_NUMBER_REGEX: Regex = Regex::new(r"^\+?\d{10,15}$").unwrap();
}

/// Check a phone number against the accepted format
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(phone_number)
}

/// Mask a phone number for logging, keeping the last four digits
pub fn mask_phone_number(phone_number: &str) -> String {
    let digits: Vec<char> = phone_number.chars().collect();
    if digits.len() <= 4 {
        return "****".to_string();
    }
    let visible: String = digits[digits.len() - 4..].iter().collect();
    format!("****{}", visible)
}
