//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container used by all actions.
//! Persistence sits behind `BaseAccountStore` so tests can run without Postgres.

use std::sync::Arc;
use std::time::Duration;

use crate::domains::auth::JwtService;
use crate::kernel::BaseAccountStore;

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseAccountStore>,
    /// JWT service for access/refresh token issuance
    pub jwt_service: Arc<JwtService>,
    /// Fixed pause before each verification code is generated
    pub code_generation_delay: Duration,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        store: Arc<dyn BaseAccountStore>,
        jwt_service: Arc<JwtService>,
        code_generation_delay: Duration,
    ) -> Self {
        Self {
            store,
            jwt_service,
            code_generation_delay,
        }
    }
}
