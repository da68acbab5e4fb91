//! Generate verification code action

use anyhow::Result;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domains::accounts::get_or_create_account;
use crate::domains::accounts::models::{generate_verification_code, mask_phone_number};
use crate::kernel::ServerDeps;

/// A freshly issued verification code
#[derive(Debug, Clone)]
pub struct CodeIssued {
    pub account_id: Uuid,
    pub code: String,
    pub account_created: bool,
}

/// Issue a 4-digit verification code for a (validated) phone number.
///
/// Creates the account on first request. Any outstanding code is overwritten.
/// The code is handed back to the caller rather than delivered by SMS.
pub async fn generate_code(phone_number: String, deps: &ServerDeps) -> Result<CodeIssued> {
    if !deps.code_generation_delay.is_zero() {
        tokio::time::sleep(deps.code_generation_delay).await;
    }

    let code = generate_verification_code();
    let (account, account_created) =
        get_or_create_account(&phone_number, deps.store.as_ref()).await?;

    if account.verification_code.is_some() {
        warn!(
            account_id = %account.id,
            "Replacing unused verification code for {}",
            mask_phone_number(&phone_number)
        );
    }

    deps.store.set_verification_code(account.id, &code).await?;

    info!(
        account_id = %account.id,
        "Verification code issued for {}",
        mask_phone_number(&phone_number)
    );

    Ok(CodeIssued {
        account_id: account.id,
        code,
        account_created,
    })
}
