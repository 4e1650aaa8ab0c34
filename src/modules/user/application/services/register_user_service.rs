use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::user::application::{
    domain::{OnboardingState, Role, User, UserState},
    ports::{
        incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
        outgoing::{CreateUserData, UserQuery, UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<User, RegisterUserError> {
        let exists = self
            .query
            .exists_by_wa_id(command.wa_id())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to check WhatsApp ID uniqueness");
                RegisterUserError::RepositoryError(e.to_string())
            })?;

        if exists {
            return Err(RegisterUserError::DuplicateWaId);
        }

        let data = CreateUserData {
            wa_id: command.wa_id().to_string(),
            name: command.name().map(str::to_string),
            school_name: command.school_name().map(str::to_string),
            region: command.region().map(str::to_string),
            role: Role::Teacher,
            onboarding_state: OnboardingState::New,
            state: UserState::INITIAL,
        };

        // The unique index still catches a concurrent insert of the same wa_id.
        let user = self
            .repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::DuplicateWaId => RegisterUserError::DuplicateWaId,
                other => {
                    error!(error = %other, "Failed to insert user");
                    RegisterUserError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %user.id, "User registered for review");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use mockall::mock;

    use crate::modules::user::application::domain::{UserFilter, UserId};
    use crate::modules::user::application::ports::outgoing::UserQueryError;
    use crate::tests::support::in_memory_user_store::InMemoryUserStore;

    mock! {
        pub Query {}

        #[async_trait]
        impl UserQuery for Query {
            async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, UserQueryError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError>;
            async fn exists_by_wa_id(&self, wa_id: &str) -> Result<bool, UserQueryError>;
        }
    }

    mock! {
        pub Repository {}

        #[async_trait]
        impl UserRepository for Repository {
            async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;
            async fn update_state(
                &self,
                id: UserId,
                expected: Option<UserState>,
                state: UserState,
                updated_at: DateTime<Utc>,
            ) -> Result<User, UserRepositoryError>;
        }
    }

    fn command(wa_id: &str) -> RegisterUserCommand {
        RegisterUserCommand::new(
            wa_id.to_string(),
            Some("Neema".into()),
            Some("Kibaha Secondary".into()),
            Some(" ".into()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn registers_user_in_review_as_teacher() {
        let store = InMemoryUserStore::new();
        let service = RegisterUserService::new(store.clone(), store.clone());

        let user = service.execute(command("255712345678")).await.unwrap();

        assert_eq!(user.state, UserState::InReview);
        assert_eq!(user.role, Role::Teacher);
        assert_eq!(user.onboarding_state, Some(OnboardingState::New));
        assert_eq!(user.name.as_deref(), Some("Neema"));
        assert_eq!(user.region, None);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn duplicate_wa_id_is_rejected_and_leaves_one_row() {
        let store = InMemoryUserStore::new();
        let service = RegisterUserService::new(store.clone(), store.clone());

        service.execute(command("255712345678")).await.unwrap();
        let second = service.execute(command("255712345678")).await;

        assert!(matches!(second, Err(RegisterUserError::DuplicateWaId)));
        assert_eq!(store.count_by_wa_id("255712345678"), 1);
    }

    #[tokio::test]
    async fn unique_violation_on_insert_maps_to_duplicate() {
        let mut query = MockQuery::new();
        query.expect_exists_by_wa_id().times(1).returning(|_| Ok(false));

        let mut repo = MockRepository::new();
        repo.expect_create_user()
            .times(1)
            .returning(|_| Err(UserRepositoryError::DuplicateWaId));

        let service = RegisterUserService::new(query, repo);
        let result = service.execute(command("255712345678")).await;

        assert!(matches!(result, Err(RegisterUserError::DuplicateWaId)));
    }

    #[tokio::test]
    async fn duplicate_check_short_circuits_insert() {
        let mut query = MockQuery::new();
        query.expect_exists_by_wa_id().times(1).returning(|_| Ok(true));

        let mut repo = MockRepository::new();
        repo.expect_create_user().times(0);

        let service = RegisterUserService::new(query, repo);
        let result = service.execute(command("255712345678")).await;

        assert!(matches!(result, Err(RegisterUserError::DuplicateWaId)));
    }

    #[tokio::test]
    async fn storage_error_is_mapped() {
        let store = InMemoryUserStore::failing();
        let service = RegisterUserService::new(store.clone(), store);

        let result = service.execute(command("255712345678")).await;

        assert!(matches!(result, Err(RegisterUserError::RepositoryError(_))));
    }
}
