use async_trait::async_trait;

use crate::modules::auth::application::domain::IssuedSession;

#[derive(Debug, Clone)]
pub struct LoginAdminCommand {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginAdminCommandError {
    #[error("Username and password are required")]
    MissingCredentials,
}

impl LoginAdminCommand {
    pub fn new(username: String, password: String) -> Result<Self, LoginAdminCommandError> {
        let username = username.trim().to_string();
        if username.is_empty() || password.is_empty() {
            return Err(LoginAdminCommandError::MissingCredentials);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Failed to issue session token: {0}")]
    TokenGenerationFailed(String),
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, command: LoginAdminCommand) -> Result<IssuedSession, LoginAdminError>;
}
