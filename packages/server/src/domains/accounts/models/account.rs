use anyhow::Result;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

/// Account - one record per phone number
///
/// The verification code is present only while a code is outstanding.
/// The invite code is assigned once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,
    pub phone_number: String,
    pub password_hash: String,
    pub verification_code: Option<String>,
    pub invite_code: String,
    pub activated_invite_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for an account that does not exist yet
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub id: Uuid,
    pub phone_number: String,
    pub password_hash: String,
    pub invite_code: String,
}

impl NewAccount {
    pub fn new(phone_number: &str, invite_code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.to_string(),
            password_hash: unusable_password_hash(),
            invite_code,
        }
    }

    /// Materialize the row as it would be stored
    pub fn into_account(self, now: DateTime<Utc>) -> Account {
        Account {
            id: self.id,
            phone_number: self.phone_number,
            password_hash: self.password_hash,
            verification_code: None,
            invite_code: self.invite_code,
            activated_invite_code: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Result of an atomic insert-or-fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new row was written
    Created(Account),
    /// The phone number was already registered; the stored row is returned untouched
    Existing(Account),
    /// Another account owns the proposed invite code; nothing was written
    InviteCodeTaken,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Account {
    /// Insert the account, or fetch the existing one for the same phone number
    ///
    /// Relies on the unique constraints on `phone_number` and `invite_code`;
    /// a conflict on either column writes nothing.
    pub async fn insert_or_fetch(new_account: NewAccount, pool: &PgPool) -> Result<InsertOutcome> {
        let inserted = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, phone_number, password_hash, invite_code)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT DO NOTHING
            RETURNING *
            "#,
        )
        .bind(new_account.id)
        .bind(&new_account.phone_number)
        .bind(&new_account.password_hash)
        .bind(&new_account.invite_code)
        .fetch_optional(pool)
        .await?;

        if let Some(account) = inserted {
            return Ok(InsertOutcome::Created(account));
        }

        match Self::find_by_phone(&new_account.phone_number, pool).await? {
            Some(existing) => Ok(InsertOutcome::Existing(existing)),
            None => Ok(InsertOutcome::InviteCodeTaken),
        }
    }

    /// Find account by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find account by phone number
    pub async fn find_by_phone(phone_number: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM accounts WHERE phone_number = $1")
            .bind(phone_number)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Check if any account owns this invite code
    pub async fn invite_code_exists(invite_code: &str, pool: &PgPool) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE invite_code = $1)",
        )
        .bind(invite_code)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Overwrite the outstanding verification code
    pub async fn set_verification_code(id: Uuid, code: &str, pool: &PgPool) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET verification_code = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(code)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            anyhow::bail!("Account {} not found", id);
        }
        Ok(())
    }

    /// Clear the verification code if it still equals `code`
    ///
    /// Returns false when the code did not match or was already consumed.
    pub async fn consume_verification_code(id: Uuid, code: &str, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET verification_code = NULL, updated_at = NOW()
            WHERE id = $1 AND verification_code = $2
            "#,
        )
        .bind(id)
        .bind(code)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Record a redeemed invite code unless one is already recorded
    pub async fn activate_invite_code(id: Uuid, invite_code: &str, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET activated_invite_code = $2, updated_at = NOW()
            WHERE id = $1 AND activated_invite_code IS NULL
            "#,
        )
        .bind(id)
        .bind(invite_code)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Phone numbers of every account that redeemed `invite_code`
    pub async fn invited_phone_numbers(invite_code: &str, pool: &PgPool) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT phone_number
            FROM accounts
            WHERE activated_invite_code = $1
            ORDER BY phone_number
            "#,
        )
        .bind(invite_code)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Total number of accounts
    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Credential placeholder for accounts that never sign in with a password
///
/// The `!` prefix can never be produced by a real password hasher, so no
/// password will ever match it.
pub fn unusable_password_hash() -> String {
    let mut hasher = Sha256::new();
    hasher.update(Uuid::new_v4().as_bytes());
    format!("!{:x}", hasher.finalize())
}
