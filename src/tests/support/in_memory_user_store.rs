use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use crate::modules::user::application::{
    domain::{User, UserFilter, UserId, UserState},
    ports::outgoing::{
        CreateUserData, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
    },
};
use crate::tests::support::user_fixtures::sample_user;

/// `users` table stand-in shared by query and repository roles.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    next_id: i32,
    failing: bool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error.
    pub fn failing() -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().failing = true;
        store
    }

    pub fn seed(&self, wa_id: &str, state: UserState, created_at: DateTime<Utc>) -> User {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;

        let mut user = sample_user(inner.next_id, wa_id, state);
        user.created_at = created_at;
        user.updated_at = created_at;

        inner.users.push(user.clone());
        user
    }

    pub fn seed_user(&self, user: User) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id = inner.next_id.max(user.id.value());
        inner.users.push(user);
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        let inner = self.inner.lock().unwrap();
        inner.users.iter().find(|u| u.id == id).cloned()
    }

    pub fn count_by_wa_id(&self, wa_id: &str) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.users.iter().filter(|u| u.wa_id == wa_id).count()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, UserQueryError> {
        let inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(UserQueryError::DatabaseError("connection refused".into()));
        }

        let mut users: Vec<User> = inner
            .users
            .iter()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError> {
        let inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(UserQueryError::DatabaseError("connection refused".into()));
        }
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn exists_by_wa_id(&self, wa_id: &str) -> Result<bool, UserQueryError> {
        let inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(UserQueryError::DatabaseError("connection refused".into()));
        }
        Ok(inner.users.iter().any(|u| u.wa_id == wa_id))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(UserRepositoryError::DatabaseError("connection refused".into()));
        }
        if inner.users.iter().any(|u| u.wa_id == data.wa_id) {
            return Err(UserRepositoryError::DuplicateWaId);
        }

        inner.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: UserId::from(inner.next_id),
            wa_id: data.wa_id,
            name: data.name,
            school_name: data.school_name,
            region: data.region,
            birthday: None,
            role: data.role,
            onboarding_state: Some(data.onboarding_state),
            state: data.state,
            class_info: None,
            last_message_at: None,
            created_at: now,
            updated_at: now,
        };

        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update_state(
        &self,
        id: UserId,
        expected: Option<UserState>,
        state: UserState,
        updated_at: DateTime<Utc>,
    ) -> Result<User, UserRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(UserRepositoryError::DatabaseError("connection refused".into()));
        }

        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserRepositoryError::NotFound)?;

        if let Some(expected) = expected.filter(|s| *s != user.state) {
            return Err(UserRepositoryError::StaleState(expected));
        }

        user.state = state;
        user.updated_at = updated_at;
        Ok(user.clone())
    }
}
