//! Test harness for integration testing.
//!
//! HTTP tests run against an in-memory account store. Postgres store tests use
//! a shared testcontainers Postgres, started once and migrated once.

use anyhow::{Context, Result};
use invite_auth::kernel::{PostgresAccountStore, TestDependencies};
use invite_auth::server::build_app;
use sqlx::PgPool;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use super::ApiClient;

fn init_tracing() {
    // Run tests with: RUST_LOG=debug cargo test -- --nocapture
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test harness wiring the full router to in-memory dependencies.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let response = ctx.client().get("/health", None).await;
/// }
/// ```
pub struct TestHarness {
    /// Dependencies behind the router - use the store for assertions.
    pub deps: TestDependencies,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }

    async fn teardown(self) {
        // In-memory store is dropped with the harness
    }
}

impl TestHarness {
    pub fn new() -> Self {
        init_tracing();
        Self::with_deps(TestDependencies::new())
    }

    pub fn with_deps(deps: TestDependencies) -> Self {
        Self { deps }
    }

    /// Get an HTTP client for this harness.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(build_app(self.deps.server_deps(), Vec::new()))
    }
}

/// Shared Postgres container that persists across all store tests.
struct SharedPostgres {
    db_url: String,
    // Keep container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_POSTGRES: OnceCell<SharedPostgres> = OnceCell::const_new();

impl SharedPostgres {
    async fn init() -> Result<Self> {
        init_tracing();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        // Run migrations once on the shared database
        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_POSTGRES
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared Postgres container")
            })
            .await
    }
}

/// Postgres-backed store on the shared container.
///
/// Tests share one database, so each test should use its own phone numbers
/// (see `fixtures::unique_phone_number`).
pub async fn postgres_store() -> Result<PostgresAccountStore> {
    let infra = SharedPostgres::get().await;
    let pool = PgPool::connect(&infra.db_url)
        .await
        .context("Failed to connect to test database")?;
    Ok(PostgresAccountStore::new(pool))
}
