//! Get profile action

use anyhow::Result;
use serde::Serialize;
use uuid::Uuid;

use crate::kernel::ServerDeps;

/// Profile view of an account, including who redeemed its invite code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub phone_number: String,
    pub invite_code: String,
    pub activated_invite_code: Option<String>,
    /// Phone numbers of accounts that redeemed this account's invite code
    pub invited_users: Vec<String>,
}

/// Load the profile for an account, or None if the account is gone
pub async fn get_profile(account_id: Uuid, deps: &ServerDeps) -> Result<Option<Profile>> {
    let Some(account) = deps.store.find_by_id(account_id).await? else {
        return Ok(None);
    };

    let invited_users = deps
        .store
        .invited_phone_numbers(&account.invite_code)
        .await?;

    Ok(Some(Profile {
        phone_number: account.phone_number,
        invite_code: account.invite_code,
        activated_invite_code: account.activated_invite_code,
        invited_users,
    }))
}
