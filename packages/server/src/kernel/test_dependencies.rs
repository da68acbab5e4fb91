// TestDependencies - in-memory wiring for tests
//
// Builds ServerDeps around an InMemoryAccountStore with no code generation
// delay, keeping a typed handle on the store for assertions.

use std::sync::Arc;
use std::time::Duration;

use super::{InMemoryAccountStore, ServerDeps};
use crate::domains::auth::JwtService;

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "test_issuer";

pub struct TestDependencies {
    pub store: Arc<InMemoryAccountStore>,
    pub jwt_service: Arc<JwtService>,
    pub code_generation_delay: Duration,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryAccountStore::new()),
            jwt_service: Arc::new(JwtService::new(TEST_JWT_SECRET, TEST_JWT_ISSUER.to_string())),
            code_generation_delay: Duration::ZERO,
        }
    }

    pub fn with_code_generation_delay(mut self, delay: Duration) -> Self {
        self.code_generation_delay = delay;
        self
    }

    pub fn with_jwt_service(mut self, jwt_service: JwtService) -> Self {
        self.jwt_service = Arc::new(jwt_service);
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.store.clone(),
            self.jwt_service.clone(),
            self.code_generation_delay,
        )
    }
}
