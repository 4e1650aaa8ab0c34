use async_trait::async_trait;

use crate::modules::registration::application::domain::Registration;

//
// ──────────────────────────────────────────────────────────
// Submit Registration Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRegistrationCommand {
    full_name: String,
    school_name: String,
    email: String,
    whatsapp_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRegistrationCommandError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl SubmitRegistrationCommand {
    pub fn new(
        full_name: String,
        school_name: String,
        email: String,
        whatsapp_number: String,
    ) -> Result<Self, SubmitRegistrationCommandError> {
        let full_name = full_name.trim();
        let school_name = school_name.trim();
        let email = email.trim();
        let whatsapp_number = whatsapp_number.trim();

        if [full_name, school_name, email, whatsapp_number]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(SubmitRegistrationCommandError::MissingFields);
        }

        if !email_address::EmailAddress::is_valid(email) {
            return Err(SubmitRegistrationCommandError::InvalidEmail);
        }

        Ok(Self {
            full_name: full_name.to_string(),
            school_name: school_name.to_string(),
            email: email.to_string(),
            whatsapp_number: whatsapp_number.to_string(),
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn school_name(&self) -> &str {
        &self.school_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn whatsapp_number(&self) -> &str {
        &self.whatsapp_number
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitRegistrationError {
    #[error("A registration with this email has already been submitted")]
    DuplicateEmail,

    #[error("A registration with this WhatsApp number has already been submitted")]
    DuplicateWhatsappNumber,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitRegistrationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitRegistrationCommand,
    ) -> Result<Registration, SubmitRegistrationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(
        name: &str,
        school: &str,
        email: &str,
        phone: &str,
    ) -> Result<SubmitRegistrationCommand, SubmitRegistrationCommandError> {
        SubmitRegistrationCommand::new(name.into(), school.into(), email.into(), phone.into())
    }

    #[test]
    fn trims_every_field() {
        let cmd = command(" Neema ", " Kibaha ", " neema@example.org ", " 0711 ").unwrap();
        assert_eq!(cmd.full_name(), "Neema");
        assert_eq!(cmd.school_name(), "Kibaha");
        assert_eq!(cmd.email(), "neema@example.org");
        assert_eq!(cmd.whatsapp_number(), "0711");
    }

    #[test]
    fn any_blank_field_is_missing() {
        assert_eq!(
            command("Neema", "  ", "neema@example.org", "0711").unwrap_err(),
            SubmitRegistrationCommandError::MissingFields
        );
        assert_eq!(
            command("Neema", "Kibaha", "neema@example.org", "").unwrap_err(),
            SubmitRegistrationCommandError::MissingFields
        );
    }

    #[test]
    fn rejects_malformed_email() {
        assert_eq!(
            command("Neema", "Kibaha", "neema-at-example", "0711").unwrap_err(),
            SubmitRegistrationCommandError::InvalidEmail
        );
    }
}
