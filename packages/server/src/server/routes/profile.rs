//! Authenticated profile endpoints

use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::common::{present, ApiError, ApiResult, FieldValidator, RawField, USER_NOT_FOUND};
use crate::domains::accounts::models::INVITE_CODE_LENGTH;
use crate::domains::invites::{activate_invite_code, get_profile, ActivateInviteCodeResult, Profile};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;
use crate::server::routes::auth::json_body;

pub const INVITE_CODE_ACTIVATED: &str = "Invite code activated successfully.";

#[derive(Debug, Deserialize)]
pub struct ActivateInviteCodeRequest {
    #[serde(default, deserialize_with = "present")]
    pub invite_code: RawField,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /profile/
pub async fn get_profile_handler(
    Extension(state): Extension<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Profile>> {
    get_profile(auth_user.account_id, &state.server_deps)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::Unauthorized(USER_NOT_FOUND.to_string()))
}

/// POST /profile/ - redeem another account's invite code
pub async fn activate_invite_code_handler(
    Extension(state): Extension<AppState>,
    auth_user: AuthUser,
    payload: Result<Json<ActivateInviteCodeRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let request = json_body(payload)?;

    let mut validator = FieldValidator::new();
    let invite_code = validator.max_length("invite_code", request.invite_code, INVITE_CODE_LENGTH);
    let invite_code = validator.finish(invite_code)?;

    match activate_invite_code(auth_user.account_id, invite_code, &state.server_deps).await? {
        ActivateInviteCodeResult::Activated => Ok(Json(MessageResponse {
            message: INVITE_CODE_ACTIVATED.to_string(),
        })),
        ActivateInviteCodeResult::AlreadyActivated => Err(ApiError::AlreadyActivated),
        ActivateInviteCodeResult::InviteCodeNotFound => Err(ApiError::invite_code_not_found()),
        ActivateInviteCodeResult::AccountNotFound => {
            Err(ApiError::Unauthorized(USER_NOT_FOUND.to_string()))
        }
    }
}
