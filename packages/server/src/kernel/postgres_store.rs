//! Postgres-backed account store
//!
//! Thin adapter over the `Account` model queries.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::accounts::{Account, InsertOutcome, NewAccount};
use crate::kernel::BaseAccountStore;

/// Wrapper around PgPool that implements BaseAccountStore trait
#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseAccountStore for PostgresAccountStore {
    async fn insert_or_fetch(&self, new_account: NewAccount) -> Result<InsertOutcome> {
        Account::insert_or_fetch(new_account, &self.pool).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        Account::find_by_id(id, &self.pool).await
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>> {
        Account::find_by_phone(phone_number, &self.pool).await
    }

    async fn invite_code_exists(&self, invite_code: &str) -> Result<bool> {
        Account::invite_code_exists(invite_code, &self.pool).await
    }

    async fn set_verification_code(&self, id: Uuid, code: &str) -> Result<()> {
        Account::set_verification_code(id, code, &self.pool).await
    }

    async fn consume_verification_code(&self, id: Uuid, code: &str) -> Result<bool> {
        Account::consume_verification_code(id, code, &self.pool).await
    }

    async fn activate_invite_code(&self, id: Uuid, invite_code: &str) -> Result<bool> {
        Account::activate_invite_code(id, invite_code, &self.pool).await
    }

    async fn invited_phone_numbers(&self, invite_code: &str) -> Result<Vec<String>> {
        Account::invited_phone_numbers(invite_code, &self.pool).await
    }

    async fn count(&self) -> Result<i64> {
        Account::count(&self.pool).await
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
