use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("ADMIN_PASSWORD must be set")]
    MissingPassword,

    #[error("Admin username cannot be empty")]
    EmptyUsername,
}

/// The single admin account, configured at startup.
///
/// Only digests are kept, so the plain password never lives past construction.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    username_digest: [u8; 32],
    password_digest: [u8; 32],
}

impl AdminCredentials {
    pub const DEFAULT_USERNAME: &'static str = "admin";

    pub fn new(username: &str, password: &str) -> Result<Self, CredentialsError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(CredentialsError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(CredentialsError::MissingPassword);
        }

        Ok(Self {
            username: username.to_string(),
            username_digest: digest(username),
            password_digest: digest(password),
        })
    }

    /// `ADMIN_USERNAME` (default `admin`) and `ADMIN_PASSWORD` (required).
    pub fn from_env() -> Result<Self, CredentialsError> {
        let username = std::env::var("ADMIN_USERNAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_USERNAME.to_string());

        let password = std::env::var("ADMIN_PASSWORD").map_err(|_| CredentialsError::MissingPassword)?;

        Self::new(&username, &password)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        // Evaluate both so timing does not reveal which one failed.
        let user_ok = digests_equal(&self.username_digest, &digest(username.trim()));
        let pass_ok = digests_equal(&self.password_digest, &digest(password));
        user_ok & pass_ok
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

fn digests_equal(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// A verified admin session, as seen by request handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
}

/// A freshly signed session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub username: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
