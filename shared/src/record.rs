use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Columns the viewer reads from the publications CSV. Any other column is
/// preserved verbatim but unused.
pub const ISSUE_DATE: &str = "issue_date";
pub const PLACE_OF_PUBLICATION: &str = "place_of_publication";
pub const CATEGORIES: &str = "Categories";
pub const WEB_URL: &str = "Web_URL";

/// The full ordered record sequence, loaded once per session.
pub type RecordSet = Vec<Record>;

/// One newspaper issue entry: trimmed CSV cell values keyed by header name.
/// Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn issue_date(&self) -> Option<&str> {
        self.get(ISSUE_DATE)
    }

    pub fn place_of_publication(&self) -> Option<&str> {
        self.get(PLACE_OF_PUBLICATION)
    }

    pub fn categories(&self) -> Option<&str> {
        self.get(CATEGORIES)
    }

    pub fn web_url(&self) -> Option<&str> {
        self.get(WEB_URL)
    }

    /// Year taken from the first four characters of `issue_date`
    /// (`"1775-03-01"` -> 1775). `None` when the column is missing, shorter
    /// than four characters, or not an integer prefix.
    pub fn issue_year(&self) -> Option<i32> {
        let date = self.issue_date()?;
        date.get(..4)?.parse().ok()
    }

    /// `issue_date` parsed as a `%Y-%m-%d` calendar date. `None` for missing
    /// or malformed values; those records sort after all dated ones.
    pub fn issue_calendar_date(&self) -> Option<NaiveDate> {
        let date = self.issue_date()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }
}
