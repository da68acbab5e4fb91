use std::fmt;

use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which half of a token pair a JWT is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,            // Subject (account_id as string)
    pub account_id: Uuid,       // Account UUID
    pub phone_number: String,   // Phone number (for logging/debugging)
    pub token_type: TokenType,  // Access or refresh
    pub exp: i64,               // Expiration timestamp
    pub iat: i64,               // Issued at timestamp
    pub iss: String,            // Issuer
    pub jti: String,            // JWT ID (unique token identifier)
}

/// Access + refresh tokens issued together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// JWT Service - creates, verifies and refreshes JWT tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    access_ttl: chrono::Duration,
    refresh_ttl: chrono::Duration,
}

impl JwtService {
    /// Create new JWT service with secret and issuer
    ///
    /// Access tokens live 5 minutes, refresh tokens 24 hours.
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            access_ttl: chrono::Duration::minutes(5),
            refresh_ttl: chrono::Duration::hours(24),
        }
    }

    /// Override token lifetimes
    pub fn with_lifetimes(mut self, access_ttl: chrono::Duration, refresh_ttl: chrono::Duration) -> Self {
        self.access_ttl = access_ttl;
        self.refresh_ttl = refresh_ttl;
        self
    }

    /// Create a single token for an account
    pub fn create_token(
        &self,
        account_id: Uuid,
        phone_number: String,
        token_type: TokenType,
    ) -> Result<String> {
        let now = chrono::Utc::now();
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };

        let claims = Claims {
            sub: account_id.to_string(),
            account_id,
            phone_number,
            token_type,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(), // Unique token ID
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Create a fresh access + refresh pair for an account
    pub fn create_token_pair(&self, account_id: Uuid, phone_number: &str) -> Result<TokenPair> {
        Ok(TokenPair {
            access: self.create_token(account_id, phone_number.to_string(), TokenType::Access)?,
            refresh: self.create_token(account_id, phone_number.to_string(), TokenType::Refresh)?,
        })
    }

    /// Verify and decode a JWT token of the expected type
    ///
    /// Returns claims if token is valid, not expired, and of the expected type
    pub fn verify_token(&self, token: &str, expected: TokenType) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)?.claims;
        if claims.token_type != expected {
            anyhow::bail!("Expected {} token, got {} token", expected, claims.token_type);
        }
        Ok(claims)
    }

    /// Exchange a valid refresh token for a new access token
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<String> {
        let claims = self.verify_token(refresh_token, TokenType::Refresh)?;
        self.create_token(claims.account_id, claims.phone_number, TokenType::Access)
    }
}
