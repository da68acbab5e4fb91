//! Auth domain - sign-in via one-time verification codes (phone number)
//!
//! Responsibilities:
//! - Issuing 4-digit verification codes (returned in-band, never sent via SMS)
//! - Consuming codes in exchange for an access/refresh token pair
//! - Refreshing access tokens

pub mod actions;
pub mod jwt;

pub use jwt::{Claims, JwtService, TokenPair, TokenType};
