use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use crate::modules::registration::application::{
    domain::{Registration, RegistrationFilter, RegistrationId, RegistrationStatus},
    ports::outgoing::{
        CreateRegistrationData, RegistrationQuery, RegistrationQueryError,
        RegistrationRepository, RegistrationRepositoryError,
    },
};

/// `registrations` table stand-in shared by query and repository roles.
#[derive(Clone, Default)]
pub struct InMemoryRegistrationStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Registration>,
    next_id: i32,
    failing: bool,
}

const FAILURE: &str = "connection refused";

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().failing = true;
        store
    }

    pub fn seed(&self, registration: Registration) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id = inner.next_id.max(registration.id.value());
        inner.rows.push(registration);
    }

    pub fn get(&self, id: RegistrationId) -> Option<Registration> {
        let inner = self.inner.lock().unwrap();
        inner.rows.iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl RegistrationQuery for InMemoryRegistrationStore {
    async fn list(
        &self,
        filter: &RegistrationFilter,
    ) -> Result<Vec<Registration>, RegistrationQueryError> {
        let inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(RegistrationQueryError::DatabaseError(FAILURE.into()));
        }

        let mut rows: Vec<Registration> = inner
            .rows
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RegistrationQueryError> {
        let inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(RegistrationQueryError::DatabaseError(FAILURE.into()));
        }
        Ok(inner.rows.iter().any(|r| r.email == email))
    }

    async fn exists_by_whatsapp_number(
        &self,
        whatsapp_number: &str,
    ) -> Result<bool, RegistrationQueryError> {
        let inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(RegistrationQueryError::DatabaseError(FAILURE.into()));
        }
        Ok(inner.rows.iter().any(|r| r.whatsapp_number == whatsapp_number))
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationStore {
    async fn create(
        &self,
        data: CreateRegistrationData,
    ) -> Result<Registration, RegistrationRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(RegistrationRepositoryError::DatabaseError(FAILURE.into()));
        }

        inner.next_id += 1;
        let now = Utc::now();
        let registration = Registration {
            id: RegistrationId::from(inner.next_id),
            full_name: data.full_name,
            school_name: data.school_name,
            email: data.email,
            whatsapp_number: data.whatsapp_number,
            status: RegistrationStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        inner.rows.push(registration.clone());
        Ok(registration)
    }

    async fn update_status(
        &self,
        id: RegistrationId,
        status: RegistrationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Registration, RegistrationRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(RegistrationRepositoryError::DatabaseError(FAILURE.into()));
        }

        let row = inner
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RegistrationRepositoryError::NotFound)?;

        row.status = status;
        row.updated_at = updated_at;
        Ok(row.clone())
    }
}
