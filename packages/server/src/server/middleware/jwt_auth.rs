use crate::common::{ApiError, CREDENTIALS_NOT_PROVIDED};
use crate::domains::accounts::models::mask_phone_number;
use crate::domains::auth::{JwtService, TokenType};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Authenticated account information from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub account_id: Uuid,
    pub phone_number: String,
}

/// JWT authentication middleware
///
/// Extracts an access token from the Authorization header, verifies it, and adds AuthUser to request extensions.
/// If no token or invalid token, request continues without AuthUser (public access).
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(&request, &jwt_service);

    if let Some(user) = auth_user {
        debug!(
            "Authenticated account: {} ({})",
            user.account_id,
            mask_phone_number(&user.phone_number)
        );
        request.extensions_mut().insert(user);
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify JWT access token from request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    // Get Authorization header
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Extract token (handle both "Bearer <token>" and raw token)
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    // Only access tokens authenticate requests
    let claims = jwt_service.verify_token(token, TokenType::Access).ok()?;

    Some(AuthUser {
        account_id: claims.account_id,
        phone_number: claims.phone_number,
    })
}

/// Handlers that take `AuthUser` reject unauthenticated requests with 401
#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized(CREDENTIALS_NOT_PROVIDED.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_service() -> JwtService {
        JwtService::new("test_secret", "test_issuer".to_string())
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = jwt_service();
        let account_id = Uuid::new_v4();
        let token = jwt_service
            .create_token(account_id, "+1234567890".to_string(), TokenType::Access)
            .unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt_service).unwrap();
        assert_eq!(auth_user.account_id, account_id);
        assert_eq!(auth_user.phone_number, "+1234567890");
    }

    #[test]
    fn test_extract_token_without_bearer() {
        let jwt_service = jwt_service();
        let account_id = Uuid::new_v4();
        let token = jwt_service
            .create_token(account_id, "+1234567890".to_string(), TokenType::Access)
            .unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", token)
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt_service);
        assert_eq!(auth_user.unwrap().account_id, account_id);
    }

    #[test]
    fn test_refresh_token_is_not_a_credential() {
        let jwt_service = jwt_service();
        let token = jwt_service
            .create_token(Uuid::new_v4(), "+1234567890".to_string(), TokenType::Refresh)
            .unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_auth_user(&request, &jwt_service).is_none());
    }

    #[test]
    fn test_no_auth_header() {
        let jwt_service = jwt_service();
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_auth_user(&request, &jwt_service).is_none());
    }

    #[test]
    fn test_invalid_token() {
        let jwt_service = jwt_service();
        let request = axum::http::Request::builder()
            .header("authorization", "Bearer invalid_token")
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_auth_user(&request, &jwt_service).is_none());
    }
}
