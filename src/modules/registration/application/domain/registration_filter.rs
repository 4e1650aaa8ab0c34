use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

use super::entities::RegistrationStatus;
use crate::modules::user::application::domain::UnknownVariant;
use crate::shared::filter::{normalize_search, DateRange};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrationStatusFilter {
    #[default]
    All,
    Only(RegistrationStatus),
}

impl FromStr for RegistrationStatusFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "all" {
            return Ok(Self::All);
        }

        normalized
            .parse::<RegistrationStatus>()
            .map(Self::Only)
            .map_err(|_| UnknownVariant {
                kind: "status",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFilter {
    search: Option<String>,
    status: RegistrationStatusFilter,
    created: DateRange,
}

impl RegistrationFilter {
    pub fn new(
        search: Option<String>,
        status: RegistrationStatusFilter,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            search: normalize_search(search),
            status,
            created: DateRange::new(start_date, end_date),
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn status(&self) -> RegistrationStatusFilter {
        self.status
    }

    pub fn created_from(&self) -> Option<DateTime<Utc>> {
        self.created.lower_bound()
    }

    pub fn created_before(&self) -> Option<DateTime<Utc>> {
        self.created.upper_bound()
    }
}

#[cfg(test)]
impl RegistrationFilter {
    pub fn matches(&self, registration: &super::entities::Registration) -> bool {
        use crate::shared::filter::contains_ignore_case;

        let search_ok = self.search().map_or(true, |term| {
            [
                registration.full_name.as_str(),
                registration.school_name.as_str(),
                registration.email.as_str(),
            ]
            .into_iter()
            .any(|field| contains_ignore_case(Some(field), term))
        });

        let status_ok = match self.status {
            RegistrationStatusFilter::All => true,
            RegistrationStatusFilter::Only(wanted) => registration.status == wanted,
        };

        search_ok && status_ok && self.created.contains(registration.created_at)
    }
}
