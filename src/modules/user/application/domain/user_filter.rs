use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

use super::user_state::{UnknownVariant, UserState};
use crate::shared::filter::{normalize_search, DateRange};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(UserState),
}

#[cfg(test)]
impl StatusFilter {
    pub fn accepts(&self, state: UserState) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == state,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "all" {
            return Ok(StatusFilter::All);
        }

        normalized
            .parse::<UserState>()
            .map(StatusFilter::Only)
            .map_err(|_| UnknownVariant {
                kind: "status",
                value: s.to_string(),
            })
    }
}

/// Criteria for the admin review table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    search: Option<String>,
    status: StatusFilter,
    created: DateRange,
}

impl UserFilter {
    pub fn new(
        search: Option<String>,
        status: StatusFilter,
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

    pub fn status(&self) -> StatusFilter {
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
impl UserFilter {
    /// Same predicate the SQL adapter builds, evaluated in memory.
    pub fn matches(&self, user: &super::entities::User) -> bool {
        use crate::shared::filter::contains_ignore_case;

        let search_ok = match self.search() {
            None => true,
            Some(term) => [
                user.name.as_deref(),
                Some(user.wa_id.as_str()),
                user.school_name.as_deref(),
                user.region.as_deref(),
            ]
            .into_iter()
            .any(|field| contains_ignore_case(field, term)),
        };

        search_ok && self.status.accepts(user.state) && self.created.contains(user.created_at)
    }
}
