use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ADMIN_SESSION_TOKEN_TYPE: &str = "admin_session";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Admin username
    pub sub: String,
    /// Unique session id
    pub jti: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub token_type: String,
}

impl SessionClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub claims: SessionClaims,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid token type: expected {0}")]
    InvalidTokenType(String),

    #[error("Failed to encode token: {0}")]
    EncodingError(String),
}

pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, username: &str) -> Result<IssuedToken, TokenError>;

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
