// Invite Auth - API Core
//
// Phone-number sign-in with one-time verification codes and invite-code referrals.
// Architecture follows domain-driven design: models own SQL, actions own business
// logic, kernel owns infrastructure and dependency wiring.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
