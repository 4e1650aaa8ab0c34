mod list_registrations_service;
mod submit_registration_service;
mod update_registration_status_service;

pub use list_registrations_service::ListRegistrationsService;
pub use submit_registration_service::SubmitRegistrationService;
pub use update_registration_status_service::UpdateRegistrationStatusService;
