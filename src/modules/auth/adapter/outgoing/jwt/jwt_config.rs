use std::env;

pub const MIN_SECRET_LEN: usize = 32;
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least {MIN_SECRET_LEN} characters long for HS256")]
    SecretTooShort,

    #[error("Invalid {key} value: '{value}'")]
    InvalidTtl { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub session_ttl_seconds: i64, // Expiration in seconds
}

impl JwtConfig {
    pub fn new(secret_key: String, session_ttl_seconds: i64) -> Result<Self, JwtConfigError> {
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(JwtConfigError::SecretTooShort);
        }
        if session_ttl_seconds <= 0 {
            return Err(JwtConfigError::InvalidTtl {
                key: "ADMIN_SESSION_TTL",
                value: session_ttl_seconds.to_string(),
            });
        }

        Ok(Self {
            secret_key,
            session_ttl_seconds,
        })
    }

    /// Load JWT configuration from `JWT_SECRET` and `ADMIN_SESSION_TTL`.
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;

        let session_ttl_seconds = match env::var("ADMIN_SESSION_TTL") {
            Ok(raw) => raw.trim().parse::<i64>().map_err(|_| JwtConfigError::InvalidTtl {
                key: "ADMIN_SESSION_TTL",
                value: raw,
            })?,
            Err(_) => DEFAULT_SESSION_TTL_SECONDS,
        };

        Self::new(secret_key, session_ttl_seconds)
    }
}
