//! Refresh access token action

use tracing::{debug, warn};

use crate::kernel::ServerDeps;

/// Result of a refresh attempt
#[derive(Debug)]
pub enum RefreshResult {
    Refreshed { access: String },
    Rejected { reason: String },
}

/// Exchange a refresh token for a new access token.
///
/// The refresh token itself is not rotated.
pub fn refresh_access_token(refresh_token: &str, deps: &ServerDeps) -> RefreshResult {
    match deps.jwt_service.refresh_access_token(refresh_token) {
        Ok(access) => {
            debug!("Access token refreshed");
            RefreshResult::Refreshed { access }
        }
        Err(e) => {
            warn!("Refresh token rejected: {}", e);
            RefreshResult::Rejected {
                reason: e.to_string(),
            }
        }
    }
}
