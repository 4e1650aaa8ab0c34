use async_trait::async_trait;

/// Revokes the presented session token, if any. Logout never fails for the caller.
#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    async fn execute(&self, token: Option<String>);
}
