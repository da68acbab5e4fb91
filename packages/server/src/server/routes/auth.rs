//! Public sign-in endpoints: code generation, code verification, token refresh

use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::common::{present, ApiError, ApiResult, FieldValidator, RawField};
use crate::domains::accounts::models::VERIFICATION_CODE_LENGTH;
use crate::domains::auth::actions::{
    generate_code, refresh_access_token, verify_code, RefreshResult, VerifyCodeResult,
};
use crate::server::app::AppState;

pub const CODE_GENERATED: &str = "Verification code generated.";
pub const VERIFICATION_SUCCEEDED: &str = "Verification successful.";

#[derive(Debug, Deserialize)]
pub struct GenerateCodeRequest {
    #[serde(default, deserialize_with = "present")]
    pub phone_number: RawField,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateCodeResponse {
    pub message: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyCodeRequest {
    #[serde(default, deserialize_with = "present")]
    pub phone_number: RawField,
    #[serde(default, deserialize_with = "present")]
    pub code: RawField,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub message: String,
    pub refresh: String,
    pub access: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    #[serde(default, deserialize_with = "present")]
    pub refresh: RawField,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshTokenResponse {
    pub access: String,
}

/// Unwrap a JSON body, turning parse failures into a 400
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))
}

/// POST /generate_code/
///
/// Returns the code in the response body. There is no SMS delivery.
pub async fn generate_code_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<GenerateCodeRequest>, JsonRejection>,
) -> ApiResult<Json<GenerateCodeResponse>> {
    let request = json_body(payload)?;

    let mut validator = FieldValidator::new();
    let phone_number = validator.phone_number("phone_number", request.phone_number);
    let phone_number = validator.finish(phone_number)?;

    let issued = generate_code(phone_number, &state.server_deps).await?;

    Ok(Json(GenerateCodeResponse {
        message: CODE_GENERATED.to_string(),
        code: issued.code,
    }))
}

/// POST /verify_code/
pub async fn verify_code_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<VerifyCodeRequest>, JsonRejection>,
) -> ApiResult<Json<VerifyCodeResponse>> {
    let request = json_body(payload)?;

    let mut validator = FieldValidator::new();
    let phone_number = validator.phone_number("phone_number", request.phone_number);
    let code = validator.max_length("code", request.code, VERIFICATION_CODE_LENGTH);
    let (phone_number, code) = validator.finish(phone_number.zip(code))?;

    match verify_code(phone_number, code, &state.server_deps).await? {
        VerifyCodeResult::Verified { tokens, .. } => Ok(Json(VerifyCodeResponse {
            message: VERIFICATION_SUCCEEDED.to_string(),
            refresh: tokens.refresh,
            access: tokens.access,
        })),
        VerifyCodeResult::AccountNotFound => Err(ApiError::account_not_found()),
        VerifyCodeResult::InvalidCode => Err(ApiError::InvalidCode),
    }
}

/// POST /token/refresh/
pub async fn refresh_token_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> ApiResult<Json<RefreshTokenResponse>> {
    let request = json_body(payload)?;

    let mut validator = FieldValidator::new();
    let refresh = validator.required("refresh", request.refresh);
    let refresh = validator.finish(refresh)?;

    match refresh_access_token(&refresh, &state.server_deps) {
        RefreshResult::Refreshed { access } => Ok(Json(RefreshTokenResponse { access })),
        RefreshResult::Rejected { .. } => Err(ApiError::TokenNotValid),
    }
}
