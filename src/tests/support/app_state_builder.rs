use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::{
    adapter::incoming::web::SessionCookiePolicy,
    application::{
        auth_use_cases::AuthUseCases,
        ports::incoming::use_cases::{LoginAdminUseCase, LogoutAdminUseCase, VerifySessionUseCase},
    },
};
use crate::modules::registration::application::{
    registration_use_cases::RegistrationUseCases,
    services::{
        ListRegistrationsService, SubmitRegistrationService, UpdateRegistrationStatusService,
    },
};
use crate::modules::user::application::{
    domain::LifecyclePolicy,
    ports::incoming::use_cases::UpdateUserStateUseCase,
    services::{
        ApproveUserService, GetUserService, ListUsersService, RegisterUserService,
        RejectUserService, UnblockUserService, UpdateUserStateService,
    },
    user_use_cases::UserUseCases,
};
use crate::tests::support::{
    in_memory_registration_store::InMemoryRegistrationStore,
    in_memory_user_store::InMemoryUserStore, stubs::*,
};
use crate::AppState;

/// Real user services over one shared in-memory table.
pub fn in_memory_user_use_cases(store: InMemoryUserStore, policy: LifecyclePolicy) -> UserUseCases {
    let update_state: Arc<dyn UpdateUserStateUseCase + Send + Sync> = Arc::new(
        UpdateUserStateService::new(store.clone(), store.clone(), policy),
    );

    UserUseCases {
        list: Arc::new(ListUsersService::new(store.clone())),
        get: Arc::new(GetUserService::new(store.clone())),
        approve: Arc::new(ApproveUserService::new(Arc::clone(&update_state), &policy)),
        reject: Arc::new(RejectUserService::new(Arc::clone(&update_state))),
        unblock: Arc::new(UnblockUserService::new(Arc::clone(&update_state))),
        update_state,
        register: Arc::new(RegisterUserService::new(store.clone(), store)),
    }
}

pub fn in_memory_registration_use_cases(store: InMemoryRegistrationStore) -> RegistrationUseCases {
    RegistrationUseCases {
        submit: Arc::new(SubmitRegistrationService::new(store.clone(), store.clone())),
        list: Arc::new(ListRegistrationsService::new(store.clone())),
        update_status: Arc::new(UpdateRegistrationStatusService::new(store)),
    }
}

pub struct TestAppStateBuilder {
    users: UserUseCases,
    registrations: RegistrationUseCases,
    auth: AuthUseCases,
    session_cookie: SessionCookiePolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            users: in_memory_user_use_cases(InMemoryUserStore::new(), LifecyclePolicy::default()),
            registrations: RegistrationUseCases {
                submit: Arc::new(StubSubmitRegistrationUseCase),
                list: Arc::new(StubListRegistrationsUseCase),
                update_status: Arc::new(StubUpdateRegistrationStatusUseCase),
            },
            auth: AuthUseCases {
                login: Arc::new(StubLoginAdminUseCase::default()),
                logout: Arc::new(RecordingLogoutAdminUseCase::default()),
                verify_session: Arc::new(StubVerifySessionUseCase::default()),
            },
            session_cookie: SessionCookiePolicy::for_environment("test"),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_users(mut self, users: UserUseCases) -> Self {
        self.users = users;
        self
    }

    pub fn with_registrations(mut self, registrations: RegistrationUseCases) -> Self {
        self.registrations = registrations;
        self
    }

    pub fn with_login(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutAdminUseCase + Send + Sync + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_verify_session(
        mut self,
        uc: impl VerifySessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.verify_session = Arc::new(uc);
        self
    }

    pub fn with_session_cookie(mut self, policy: SessionCookiePolicy) -> Self {
        self.session_cookie = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            users: self.users,
            registrations: self.registrations,
            auth: self.auth,
            session_cookie: self.session_cookie,
        })
    }
}
