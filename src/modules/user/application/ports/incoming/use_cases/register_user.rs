use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;

use crate::modules::user::application::domain::User;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserCommand {
    wa_id: String,
    name: Option<String>,
    school_name: Option<String>,
    region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("WhatsApp ID is required")]
    MissingWaId,

    #[error("WhatsApp ID must be 6-20 digits with an optional leading '+'")]
    InvalidWaId,

    #[error("Name must not exceed {max} characters")]
    NameTooLong { max: usize },

    #[error("School name must not exceed {max} characters")]
    SchoolNameTooLong { max: usize },

    #[error("Region must not exceed {max} characters")]
    RegionTooLong { max: usize },
}

static WA_ID_PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn is_wa_id_format(value: &str) -> bool {
    WA_ID_PATTERN
        .get_or_init(|| Regex::new(r"^\+?[0-9]+$"))
        .as_ref()
        .is_ok_and(|re| re.is_match(value))
}

impl RegisterUserCommand {
    pub const WA_ID_MIN_LEN: usize = 6;
    pub const WA_ID_MAX_LEN: usize = 20;
    pub const NAME_MAX_LEN: usize = 50;
    pub const SCHOOL_NAME_MAX_LEN: usize = 100;
    pub const REGION_MAX_LEN: usize = 50;

    pub fn new(
        wa_id: String,
        name: Option<String>,
        school_name: Option<String>,
        region: Option<String>,
    ) -> Result<Self, RegisterUserCommandError> {
        let wa_id = wa_id.trim();

        if wa_id.is_empty() {
            return Err(RegisterUserCommandError::MissingWaId);
        }

        let len = wa_id.chars().count();
        if !(Self::WA_ID_MIN_LEN..=Self::WA_ID_MAX_LEN).contains(&len)
            || !is_wa_id_format(wa_id)
        {
            return Err(RegisterUserCommandError::InvalidWaId);
        }

        let name = optional_text(name, Self::NAME_MAX_LEN)
            .map_err(|max| RegisterUserCommandError::NameTooLong { max })?;
        let school_name = optional_text(school_name, Self::SCHOOL_NAME_MAX_LEN)
            .map_err(|max| RegisterUserCommandError::SchoolNameTooLong { max })?;
        let region = optional_text(region, Self::REGION_MAX_LEN)
            .map_err(|max| RegisterUserCommandError::RegionTooLong { max })?;

        Ok(Self {
            wa_id: wa_id.to_string(),
            name,
            school_name,
            region,
        })
    }

    pub fn wa_id(&self) -> &str {
        &self.wa_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn school_name(&self) -> Option<&str> {
        self.school_name.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Trims and blanks-to-None; errors with the limit when too long.
fn optional_text(value: Option<String>, max: usize) -> Result<Option<String>, usize> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(v) if v.chars().count() > max => Err(max),
        other => Ok(other),
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("A user with this WhatsApp ID already exists")]
    DuplicateWaId,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<User, RegisterUserError>;
}
