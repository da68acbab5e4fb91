//! Invites domain actions - business logic functions

mod activate_invite_code;
mod get_profile;

pub use activate_invite_code::{activate_invite_code, ActivateInviteCodeResult};
pub use get_profile::{get_profile, Profile};
