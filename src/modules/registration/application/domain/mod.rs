pub mod entities;
pub mod registration_filter;

pub use entities::{Registration, RegistrationId, RegistrationStatus};
pub use registration_filter::{RegistrationFilter, RegistrationStatusFilter};
