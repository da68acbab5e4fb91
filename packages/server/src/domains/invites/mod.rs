//! Invites domain - referral bookkeeping
//!
//! Every account owns one invite code (assigned at creation, see accounts
//! domain) and may redeem exactly one code, ever. Redeeming your own code is
//! not prevented.

pub mod actions;

pub use actions::{activate_invite_code, get_profile, ActivateInviteCodeResult, Profile};
