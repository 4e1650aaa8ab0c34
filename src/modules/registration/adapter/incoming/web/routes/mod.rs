mod list_registrations;
mod registration_view;
mod submit_registration;
mod update_registration_status;

pub use list_registrations::*;
pub use registration_view::RegistrationView;
pub use submit_registration::*;
pub use update_registration_status::*;
