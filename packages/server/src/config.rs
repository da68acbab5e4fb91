use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. When unset the server keeps accounts in memory.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub access_token_ttl: chrono::Duration,
    pub refresh_token_ttl: chrono::Duration,
    /// Fixed pause before a verification code is generated
    pub code_generation_delay: Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "invite-auth".to_string()),
            access_token_ttl: ttl_from_env(
                "ACCESS_TOKEN_TTL_MINUTES",
                5,
                chrono::Duration::try_minutes,
            )?,
            refresh_token_ttl: ttl_from_env(
                "REFRESH_TOKEN_TTL_HOURS",
                24,
                chrono::Duration::try_hours,
            )?,
            code_generation_delay: Duration::from_millis(
                env::var("CODE_GENERATION_DELAY_MS")
                    .unwrap_or_else(|_| "2000".to_string())
                    .parse()
                    .context("CODE_GENERATION_DELAY_MS must be a valid number")?,
            ),
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
        })
    }
}

fn ttl_from_env(
    name: &str,
    default: i64,
    to_duration: fn(i64) -> Option<chrono::Duration>,
) -> Result<chrono::Duration> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    parse_ttl(name, &raw, to_duration)
}

/// Parse a token lifetime, rejecting values chrono cannot represent
fn parse_ttl(
    name: &str,
    raw: &str,
    to_duration: fn(i64) -> Option<chrono::Duration>,
) -> Result<chrono::Duration> {
    let value: i64 = raw
        .parse()
        .with_context(|| format!("{} must be a valid number", name))?;
    to_duration(value).with_context(|| format!("{} is out of range", name))
}

/// Split a comma-separated origin list, dropping empty entries
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
