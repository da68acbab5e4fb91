//! Auth domain actions - business logic functions
//!
//! Actions are async functions called directly from HTTP handlers with `ServerDeps`.

mod generate_code;
mod refresh_token;
mod verify_code;

pub use generate_code::{generate_code, CodeIssued};
pub use refresh_token::{refresh_access_token, RefreshResult};
pub use verify_code::{verify_code, VerifyCodeResult};
