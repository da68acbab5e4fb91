//! Get-or-create account action

use anyhow::Result;
use tracing::{debug, error, info};

use crate::domains::accounts::models::{generate_invite_code, mask_phone_number};
use crate::domains::accounts::{Account, InsertOutcome, NewAccount};
use crate::kernel::BaseAccountStore;

/// Upper bound on invite code draws for a single new account
pub const MAX_INVITE_CODE_ATTEMPTS: usize = 1000;

/// Return the account for a phone number, creating it on first sight.
///
/// The boolean is true when the account was created by this call.
pub async fn get_or_create_account(
    phone_number: &str,
    store: &dyn BaseAccountStore,
) -> Result<(Account, bool)> {
    get_or_create_account_with(phone_number, store, generate_invite_code).await
}

/// Same as [`get_or_create_account`] with a caller-supplied invite code source.
///
/// New accounts get an invite code no other account owns; a colliding draw is
/// discarded and redrawn, up to `MAX_INVITE_CODE_ATTEMPTS` times.
pub async fn get_or_create_account_with<F>(
    phone_number: &str,
    store: &dyn BaseAccountStore,
    mut next_invite_code: F,
) -> Result<(Account, bool)>
where
    F: FnMut() -> String + Send,
{
    if let Some(account) = store.find_by_phone(phone_number).await? {
        return Ok((account, false));
    }

    for attempt in 1..=MAX_INVITE_CODE_ATTEMPTS {
        let invite_code = next_invite_code();
        if store.invite_code_exists(&invite_code).await? {
            debug!(attempt, "Invite code already taken, drawing again");
            continue;
        }

        match store
            .insert_or_fetch(NewAccount::new(phone_number, invite_code))
            .await?
        {
            InsertOutcome::Created(account) => {
                info!(
                    account_id = %account.id,
                    "Created account for {}",
                    mask_phone_number(phone_number)
                );
                return Ok((account, true));
            }
            // Lost a race with a concurrent request for the same number
            InsertOutcome::Existing(account) => return Ok((account, false)),
            InsertOutcome::InviteCodeTaken => {
                debug!(attempt, "Invite code claimed concurrently, drawing again");
            }
        }
    }

    error!(
        "Could not assign a unique invite code for {} after {} attempts",
        mask_phone_number(phone_number),
        MAX_INVITE_CODE_ATTEMPTS
    );
    anyhow::bail!(
        "Failed to assign a unique invite code after {} attempts",
        MAX_INVITE_CODE_ATTEMPTS
    )
}
