// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "activate an invite code") lives in domain actions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAccountStore)

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domains::accounts::{Account, InsertOutcome, NewAccount};

// =============================================================================
// Account Store Trait (Infrastructure - persistence)
// =============================================================================

#[async_trait]
pub trait BaseAccountStore: Send + Sync {
    /// Insert a new account, or return the one already registered for its phone number.
    /// Must be atomic: concurrent calls for one phone number yield exactly one account.
    async fn insert_or_fetch(&self, new_account: NewAccount) -> Result<InsertOutcome>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>>;

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>>;

    async fn invite_code_exists(&self, invite_code: &str) -> Result<bool>;

    /// Overwrite the outstanding verification code. Errors if the account is missing.
    async fn set_verification_code(&self, id: Uuid, code: &str) -> Result<()>;

    /// Clear the verification code only if it still equals `code`.
    /// Returns whether the code was consumed.
    async fn consume_verification_code(&self, id: Uuid, code: &str) -> Result<bool>;

    /// Record a redeemed invite code only if none is recorded yet.
    /// Returns whether the code was recorded.
    async fn activate_invite_code(&self, id: Uuid, invite_code: &str) -> Result<bool>;

    /// Phone numbers of accounts that redeemed `invite_code`, in ascending order
    async fn invited_phone_numbers(&self, invite_code: &str) -> Result<Vec<String>>;

    async fn count(&self) -> Result<i64>;

    /// Cheap round trip proving the store is reachable
    async fn health_check(&self) -> Result<()>;
}
