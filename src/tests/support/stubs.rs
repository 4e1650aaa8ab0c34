use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::modules::auth::application::{
    domain::{AdminSession, IssuedSession},
    ports::incoming::use_cases::{
        LoginAdminCommand, LoginAdminError, LoginAdminUseCase, LogoutAdminUseCase,
        VerifySessionError, VerifySessionUseCase,
    },
};
use crate::modules::registration::application::{
    domain::{Registration, RegistrationFilter, RegistrationId, RegistrationStatus},
    ports::incoming::use_cases::{
        ListRegistrationsUseCase, SubmitRegistrationCommand, SubmitRegistrationError,
        SubmitRegistrationUseCase, UpdateRegistrationStatusError,
        UpdateRegistrationStatusUseCase,
    },
};
use crate::tests::support::auth_helper::TEST_SESSION_TOKEN;

//
// ──────────────────────────────────────────────────────────
// Admin auth
// ──────────────────────────────────────────────────────────
//

/// Accepts `TEST_SESSION_TOKEN` unless built with `failing`.
#[derive(Clone, Default)]
pub struct StubVerifySessionUseCase {
    error: Option<VerifySessionError>,
}

impl StubVerifySessionUseCase {
    pub fn failing(error: VerifySessionError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl VerifySessionUseCase for StubVerifySessionUseCase {
    async fn execute(&self, token: &str) -> Result<AdminSession, VerifySessionError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if token != TEST_SESSION_TOKEN {
            return Err(VerifySessionError::Invalid);
        }

        Ok(AdminSession {
            username: "admin".to_string(),
            session_id: "test-session".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        })
    }
}

#[derive(Clone)]
pub struct StubLoginAdminUseCase {
    result: Result<IssuedSession, LoginAdminError>,
}

impl StubLoginAdminUseCase {
    pub fn success(session: IssuedSession) -> Self {
        Self {
            result: Ok(session),
        }
    }

    pub fn failure(error: LoginAdminError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubLoginAdminUseCase {
    fn default() -> Self {
        Self::failure(LoginAdminError::InvalidCredentials)
    }
}

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(
        &self,
        _command: LoginAdminCommand,
    ) -> Result<IssuedSession, LoginAdminError> {
        self.result.clone()
    }
}

/// Records every token handed to logout.
#[derive(Clone, Default)]
pub struct RecordingLogoutAdminUseCase {
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

impl RecordingLogoutAdminUseCase {
    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogoutAdminUseCase for RecordingLogoutAdminUseCase {
    async fn execute(&self, token: Option<String>) {
        self.calls.lock().unwrap().push(token);
    }
}

//
// ──────────────────────────────────────────────────────────
// Legacy registrations
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubSubmitRegistrationUseCase;

#[async_trait]
impl SubmitRegistrationUseCase for StubSubmitRegistrationUseCase {
    async fn execute(
        &self,
        _command: SubmitRegistrationCommand,
    ) -> Result<Registration, SubmitRegistrationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListRegistrationsUseCase;

#[async_trait]
impl ListRegistrationsUseCase for StubListRegistrationsUseCase {
    async fn execute(&self, _filter: RegistrationFilter) -> Vec<Registration> {
        Vec::new()
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateRegistrationStatusUseCase;

#[async_trait]
impl UpdateRegistrationStatusUseCase for StubUpdateRegistrationStatusUseCase {
    async fn execute(
        &self,
        _id: RegistrationId,
        _status: RegistrationStatus,
    ) -> Result<Registration, UpdateRegistrationStatusError> {
        Err(UpdateRegistrationStatusError::NotFound)
    }
}
