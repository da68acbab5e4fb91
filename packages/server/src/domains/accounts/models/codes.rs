use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Number of digits in a verification code
pub const VERIFICATION_CODE_LENGTH: usize = 4;

/// Number of characters in an invite code
pub const INVITE_CODE_LENGTH: usize = 6;

/// Draw a uniform integer in [0, 9999] and zero-pad it to four digits
pub fn generate_verification_code() -> String {
    let value: u16 = thread_rng().gen_range(0..=9999);
    format!("{:04}", value)
}

/// Draw six characters uniformly from A-Z, a-z and 0-9
pub fn generate_invite_code() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(INVITE_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Check the shape of an invite code (not whether anyone owns it)
pub fn is_well_formed_invite_code(code: &str) -> bool {
    code.len() == INVITE_CODE_LENGTH && code.chars().all(|c| c.is_ascii_alphanumeric())
}
