//! Accounts domain - one record per phone number
//!
//! Responsibilities:
//! - Account persistence (all SQL lives in models/)
//! - Phone number format rules
//! - Verification and invite code generation
//! - Get-or-create on first code request

pub mod actions;
pub mod models;

pub use actions::{get_or_create_account, get_or_create_account_with, MAX_INVITE_CODE_ATTEMPTS};
pub use models::{Account, InsertOutcome, NewAccount};
