//! Verify code action

use anyhow::Result;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domains::accounts::models::mask_phone_number;
use crate::domains::auth::TokenPair;
use crate::kernel::ServerDeps;

/// Result of verifying a code
#[derive(Debug)]
pub enum VerifyCodeResult {
    Verified { account_id: Uuid, tokens: TokenPair },
    AccountNotFound,
    InvalidCode,
}

/// Consume the outstanding verification code and issue a token pair.
///
/// Plain equality against the stored code; codes never expire. A mismatch, or
/// no outstanding code, leaves the account untouched.
pub async fn verify_code(
    phone_number: String,
    code: String,
    deps: &ServerDeps,
) -> Result<VerifyCodeResult> {
    let Some(account) = deps.store.find_by_phone(&phone_number).await? else {
        warn!(
            "Verification attempted for unknown number {}",
            mask_phone_number(&phone_number)
        );
        return Ok(VerifyCodeResult::AccountNotFound);
    };

    if account.verification_code.as_deref() != Some(code.as_str()) {
        warn!(account_id = %account.id, "Verification code mismatch");
        return Ok(VerifyCodeResult::InvalidCode);
    }

    // Conditional clear: a concurrent request may have consumed it first
    if !deps
        .store
        .consume_verification_code(account.id, &code)
        .await?
    {
        warn!(account_id = %account.id, "Verification code already consumed");
        return Ok(VerifyCodeResult::InvalidCode);
    }

    let tokens = deps
        .jwt_service
        .create_token_pair(account.id, &account.phone_number)?;

    info!(account_id = %account.id, "Verification code accepted");

    Ok(VerifyCodeResult::Verified {
        account_id: account.id,
        tokens,
    })
}
