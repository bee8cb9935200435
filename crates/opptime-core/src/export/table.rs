//! Format-neutral tables handed to the export writers.

use std::fmt;

use crate::record::TimeLogRecord;

pub const DETAILED_LOGS_SHEET: &str = "Detailed Logs";
pub const WEEKLY_TIMESHEET_SHEET: &str = "Weekly Timesheet";

/// Detailed-log columns. The record's epoch timestamp is internal and omitted.
pub const DETAILED_LOG_HEADERS: [&str; 12] = [
    "Date",
    "Record Id",
    "Deal Name",
    "Company Name",
    "Deal Owner",
    "Role",
    "Activity",
    "Comment",
    "Start Time",
    "End Time",
    "Duration (seconds)",
    "Duration (HH:MM:SS)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Int(u64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<u64> for Cell {
    fn from(n: u64) -> Self {
        Cell::Int(n)
    }
}

/// A named sheet: header row plus data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(name: impl Into<String>, headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<C: Into<Cell>>(&mut self, row: impl IntoIterator<Item = C>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Rows rendered as text, for display and assertions.
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}

/// One row per record, in the order given.
pub fn detailed_log_table(records: &[TimeLogRecord]) -> Table {
    let mut table = Table::new(DETAILED_LOGS_SHEET, DETAILED_LOG_HEADERS);
    for r in records {
        table.push_row([
            Cell::from(r.date.format("%Y-%m-%d").to_string()),
            Cell::from(r.record_id.as_str()),
            Cell::from(r.deal_name.as_str()),
            Cell::from(r.company_name.as_str()),
            Cell::from(r.deal_owner.as_str()),
            Cell::from(r.role.as_str()),
            Cell::from(r.activity.as_str()),
            Cell::from(r.comment.as_str()),
            Cell::from(r.start_time.as_str()),
            Cell::from(r.end_time.as_str()),
            Cell::Int(r.duration_seconds),
            Cell::from(r.duration_hms()),
        ]);
    }
    table
}
