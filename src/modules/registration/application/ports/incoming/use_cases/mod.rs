mod list_registrations;
mod submit_registration;
mod update_registration_status;

pub use list_registrations::ListRegistrationsUseCase;
pub use submit_registration::{
    SubmitRegistrationCommand, SubmitRegistrationCommandError, SubmitRegistrationError,
    SubmitRegistrationUseCase,
};
pub use update_registration_status::{
    UpdateRegistrationStatusError, UpdateRegistrationStatusUseCase,
};
