//! Completed time-log record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::format_hms;

/// One completed timed interval.
///
/// Opportunity fields are a snapshot taken at stop time, so later directory
/// edits do not rewrite history. Records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLogRecord {
    /// Local calendar date of completion.
    pub date: NaiveDate,
    /// Epoch seconds at completion.
    pub timestamp: i64,
    pub record_id: String,
    pub deal_name: String,
    pub company_name: String,
    pub deal_owner: String,
    pub role: String,
    pub activity: String,
    #[serde(default)]
    pub comment: String,
    /// Local `HH:MM:SS`, display only.
    pub start_time: String,
    /// Local `HH:MM:SS`, display only.
    pub end_time: String,
    /// Whole seconds, never negative.
    pub duration_seconds: u64,
}

impl TimeLogRecord {
    pub fn duration_hms(&self) -> String {
        format_hms(self.duration_seconds)
    }
}
