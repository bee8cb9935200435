//! Period selection over the time log.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::record::TimeLogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// The reference date only.
    Daily,
    /// The Monday..Sunday week containing the reference date.
    Weekly,
}

/// Monday and Sunday of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    (start, start + Duration::days(6))
}

/// Keep the records that fall into `period` around `reference`, in order.
///
/// An empty result is not an error; the caller decides how to report it.
pub fn select_period(
    records: &[TimeLogRecord],
    period: Period,
    reference: NaiveDate,
) -> Vec<TimeLogRecord> {
    let (from, to) = match period {
        Period::Daily => (reference, reference),
        Period::Weekly => week_bounds(reference),
    };
    records
        .iter()
        .filter(|r| r.date >= from && r.date <= to)
        .cloned()
        .collect()
}
