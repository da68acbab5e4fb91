//! In-memory account store
//!
//! Used when no DATABASE_URL is configured and throughout the test suite.
//! A single write lock makes every mutation atomic. Redeemers are indexed by
//! invite code at redemption time, so profile reads never scan all accounts.

use std::collections::{BTreeSet, HashMap};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domains::accounts::{Account, InsertOutcome, NewAccount};
use crate::kernel::BaseAccountStore;

#[derive(Default)]
struct Accounts {
    by_id: HashMap<Uuid, Account>,
    id_by_phone: HashMap<String, Uuid>,
    id_by_invite_code: HashMap<String, Uuid>,
    /// invite code -> phone numbers of accounts that redeemed it
    redeemers: HashMap<String, BTreeSet<String>>,
}

#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<Accounts>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseAccountStore for InMemoryAccountStore {
    async fn insert_or_fetch(&self, new_account: NewAccount) -> Result<InsertOutcome> {
        let mut accounts = self.accounts.write().await;

        if let Some(id) = accounts.id_by_phone.get(&new_account.phone_number) {
            let existing = accounts.by_id[id].clone();
            return Ok(InsertOutcome::Existing(existing));
        }
        if accounts.id_by_invite_code.contains_key(&new_account.invite_code) {
            return Ok(InsertOutcome::InviteCodeTaken);
        }

        let account = new_account.into_account(Utc::now());
        accounts
            .id_by_phone
            .insert(account.phone_number.clone(), account.id);
        accounts
            .id_by_invite_code
            .insert(account.invite_code.clone(), account.id);
        accounts.by_id.insert(account.id, account.clone());

        Ok(InsertOutcome::Created(account))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        Ok(self.accounts.read().await.by_id.get(&id).cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .id_by_phone
            .get(phone_number)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn invite_code_exists(&self, invite_code: &str) -> Result<bool> {
        Ok(self
            .accounts
            .read()
            .await
            .id_by_invite_code
            .contains_key(invite_code))
    }

    async fn set_verification_code(&self, id: Uuid, code: &str) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .by_id
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("Account {} not found", id))?;

        account.verification_code = Some(code.to_string());
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn consume_verification_code(&self, id: Uuid, code: &str) -> Result<bool> {
        let mut accounts = self.accounts.write().await;
        let Some(account) = accounts.by_id.get_mut(&id) else {
            return Ok(false);
        };

        if account.verification_code.as_deref() != Some(code) {
            return Ok(false);
        }
        account.verification_code = None;
        account.updated_at = Utc::now();
        Ok(true)
    }

    async fn activate_invite_code(&self, id: Uuid, invite_code: &str) -> Result<bool> {
        let mut accounts = self.accounts.write().await;
        let Some(account) = accounts.by_id.get_mut(&id) else {
            return Ok(false);
        };

        if account.activated_invite_code.is_some() {
            return Ok(false);
        }
        account.activated_invite_code = Some(invite_code.to_string());
        account.updated_at = Utc::now();
        let phone_number = account.phone_number.clone();

        accounts
            .redeemers
            .entry(invite_code.to_string())
            .or_default()
            .insert(phone_number);
        Ok(true)
    }

    async fn invited_phone_numbers(&self, invite_code: &str) -> Result<Vec<String>> {
        Ok(self
            .accounts
            .read()
            .await
            .redeemers
            .get(invite_code)
            .map(|phones| phones.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.accounts.read().await.by_id.len() as i64)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
