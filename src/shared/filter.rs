// src/shared/filter.rs
use chrono::{DateTime, Days, NaiveDate, Utc};

/// Inclusive calendar-day range applied to `created_at`.
///
/// `start` maps to `start 00:00Z` (inclusive) and `end` to `end + 1 day 00:00Z`
/// (exclusive), so a record created at any time on `end` is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.start
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }

    pub fn upper_bound(&self) -> Option<DateTime<Utc>> {
        self.end
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }

    #[cfg(test)]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        let after_start = self.lower_bound().map_or(true, |lower| ts >= lower);
        let before_end = self.upper_bound().map_or(true, |upper| ts < upper);
        after_start && before_end
    }
}

/// Parses an optional `YYYY-MM-DD` query value. Blank means absent.
pub fn parse_date_param(raw: Option<&str>) -> Result<Option<NaiveDate>, chrono::ParseError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d").map(Some),
        None => Ok(None),
    }
}

/// Trims a search term; blank terms mean "no search".
pub fn normalize_search(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
pub fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// `%term%` pattern for ILIKE with `%`, `_` and `\` escaped.
pub fn ilike_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
