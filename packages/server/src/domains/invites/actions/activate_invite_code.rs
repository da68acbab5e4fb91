//! Activate invite code action

use anyhow::Result;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domains::accounts::models::is_well_formed_invite_code;
use crate::kernel::ServerDeps;

/// Result of redeeming an invite code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivateInviteCodeResult {
    Activated,
    AlreadyActivated,
    InviteCodeNotFound,
    /// The authenticated account no longer exists
    AccountNotFound,
}

/// Redeem another account's invite code.
///
/// Checks run in order: the caller has not redeemed before, then some account
/// owns the code. The write only lands if nothing was recorded in between.
pub async fn activate_invite_code(
    account_id: Uuid,
    invite_code: String,
    deps: &ServerDeps,
) -> Result<ActivateInviteCodeResult> {
    let Some(account) = deps.store.find_by_id(account_id).await? else {
        return Ok(ActivateInviteCodeResult::AccountNotFound);
    };

    if account.activated_invite_code.is_some() {
        warn!(account_id = %account.id, "Invite code already activated");
        return Ok(ActivateInviteCodeResult::AlreadyActivated);
    }

    if !is_well_formed_invite_code(&invite_code)
        || !deps.store.invite_code_exists(&invite_code).await?
    {
        warn!(account_id = %account.id, "Unknown invite code submitted");
        return Ok(ActivateInviteCodeResult::InviteCodeNotFound);
    }

    if !deps
        .store
        .activate_invite_code(account.id, &invite_code)
        .await?
    {
        warn!(account_id = %account.id, "Invite code activated concurrently");
        return Ok(ActivateInviteCodeResult::AlreadyActivated);
    }

    info!(account_id = %account.id, invite_code = %invite_code, "Invite code activated");
    Ok(ActivateInviteCodeResult::Activated)
}
