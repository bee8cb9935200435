//! Weekly timesheet summary.
//!
//! Folds a set of records into an activity × weekday matrix of seconds and
//! renders it in the timesheet layout:
//!
//! ```text
//! PROJECTS          | MAR 4 | ... | MAR 10 | TASK TOTAL\nHRS/WEEK
//! ATTENDANCE HOURS  | 1h 0m | ... | 0h 0m  |
//! (blank)
//! <activity>        | 1:00  | ... | 0:00   | 1:30
//! COMMENT           |       | ... |        |
//! ...
//! Total hours/day   | 1:00  | ... | 0:00   | 1:30
//! ```
//!
//! The week is the Monday..Sunday window of the earliest record date, not
//! whatever reference date the caller filtered with.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use super::filter::week_bounds;
use super::table::{Table, WEEKLY_TIMESHEET_SHEET};
use crate::format::{format_hm, format_hm_words};
use crate::record::TimeLogRecord;

pub const PROJECTS_HEADER: &str = "PROJECTS";
pub const TASK_TOTAL_HEADER: &str = "TASK TOTAL\nHRS/WEEK";
pub const ATTENDANCE_LABEL: &str = "ATTENDANCE HOURS";
pub const COMMENT_LABEL: &str = "COMMENT";
pub const TOTAL_LABEL: &str = "Total hours/day";

const DAYS: usize = 7;
const COLUMNS: usize = DAYS + 2;

/// Seconds per weekday for one activity, Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub activity: String,
    pub daily: [u64; DAYS],
}

impl ActivityRow {
    pub fn total(&self) -> u64 {
        self.daily.iter().sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySummary {
    week_start: Option<NaiveDate>,
    /// Sorted by activity name.
    activities: Vec<ActivityRow>,
    daily_totals: [u64; DAYS],
}

impl WeeklySummary {
    /// Build the matrix. No records means an empty summary.
    pub fn build(records: &[TimeLogRecord]) -> Self {
        let Some(earliest) = records.iter().map(|r| r.date).min() else {
            return Self::default();
        };
        let (week_start, _) = week_bounds(earliest);

        let mut by_activity: BTreeMap<&str, [u64; DAYS]> = BTreeMap::new();
        for record in records {
            let offset = (record.date - week_start).num_days();
            let Ok(idx) = usize::try_from(offset) else {
                continue;
            };
            if idx >= DAYS {
                continue;
            }
            by_activity.entry(record.activity.as_str()).or_insert([0; DAYS])[idx] +=
                record.duration_seconds;
        }

        let mut daily_totals = [0; DAYS];
        for days in by_activity.values() {
            for (total, secs) in daily_totals.iter_mut().zip(days) {
                *total += secs;
            }
        }

        let activities = by_activity
            .into_iter()
            .map(|(activity, daily)| ActivityRow {
                activity: activity.to_string(),
                daily,
            })
            .collect();

        Self {
            week_start: Some(week_start),
            activities,
            daily_totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.week_start.is_none()
    }

    pub fn week_start(&self) -> Option<NaiveDate> {
        self.week_start
    }

    pub fn week_end(&self) -> Option<NaiveDate> {
        self.week_start.map(|start| start + Duration::days(6))
    }

    pub fn activities(&self) -> &[ActivityRow] {
        &self.activities
    }

    pub fn daily_totals(&self) -> [u64; DAYS] {
        self.daily_totals
    }

    pub fn grand_total(&self) -> u64 {
        self.daily_totals.iter().sum()
    }

    /// `PROJECTS`, one `"MAR 4"` style label per day, the task-total column.
    pub fn headers(&self) -> Vec<String> {
        let Some(start) = self.week_start else {
            return Vec::new();
        };
        let mut headers = Vec::with_capacity(COLUMNS);
        headers.push(PROJECTS_HEADER.to_string());
        headers.extend((0..DAYS as i64).map(|i| {
            let day = start + Duration::days(i);
            format!("{} {}", day.format("%b").to_string().to_uppercase(), day.format("%-d"))
        }));
        headers.push(TASK_TOTAL_HEADER.to_string());
        headers
    }

    /// Rendered rows in timesheet order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut rows = Vec::with_capacity(self.activities.len() * 2 + 3);

        let mut attendance = vec![ATTENDANCE_LABEL.to_string()];
        attendance.extend(self.daily_totals.iter().map(|&s| format_hm_words(s)));
        attendance.push(String::new());
        rows.push(attendance);

        rows.push(vec![String::new(); COLUMNS]);

        for row in &self.activities {
            let mut cells = vec![row.activity.clone()];
            cells.extend(row.daily.iter().map(|&s| format_hm(s)));
            cells.push(format_hm(row.total()));
            rows.push(cells);

            let mut comment = vec![COMMENT_LABEL.to_string()];
            comment.resize(COLUMNS, String::new());
            rows.push(comment);
        }

        let mut totals = vec![TOTAL_LABEL.to_string()];
        totals.extend(self.daily_totals.iter().map(|&s| format_hm(s)));
        totals.push(format_hm(self.grand_total()));
        rows.push(totals);

        rows
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new(WEEKLY_TIMESHEET_SHEET, self.headers());
        for row in self.rows() {
            table.push_row(row);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn record(date: NaiveDate, activity: &str, secs: u64) -> TimeLogRecord {
        TimeLogRecord {
            date,
            timestamp: 0,
            record_id: "R1".into(),
            deal_name: "Deal".into(),
            company_name: "Acme".into(),
            deal_owner: "Dana".into(),
            role: "Pre-Sales".into(),
            activity: activity.into(),
            comment: String::new(),
            start_time: "09:00:00".into(),
            end_time: "10:00:00".into(),
            duration_seconds: secs,
        }
    }

    #[test]
    fn empty_input_builds_empty_summary() {
        let summary = WeeklySummary::build(&[]);
        assert!(summary.is_empty());
        assert!(summary.headers().is_empty());
        assert!(summary.rows().is_empty());
        assert!(summary.to_table().rows().is_empty());
    }

    #[test]
    fn monday_and_wednesday_example() {
        let records = vec![
            record(day(4), "Proposal Support", 3600),
            record(day(6), "Proposal Support", 1800),
        ];
        let summary = WeeklySummary::build(&records);
        let rows = summary.rows();

        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[0],
            vec!["ATTENDANCE HOURS", "1h 0m", "0h 0m", "0h 30m", "0h 0m", "0h 0m", "0h 0m", "0h 0m", ""]
        );
        assert_eq!(rows[1], vec![""; 9]);
        assert_eq!(
            rows[2],
            vec!["Proposal Support", "1:00", "0:00", "0:30", "0:00", "0:00", "0:00", "0:00", "1:30"]
        );
        assert_eq!(rows[3], vec!["COMMENT", "", "", "", "", "", "", "", ""]);
        assert_eq!(
            rows[4],
            vec!["Total hours/day", "1:00", "0:00", "0:30", "0:00", "0:00", "0:00", "0:00", "1:30"]
        );
    }

    #[test]
    fn headers_label_each_weekday() {
        let summary = WeeklySummary::build(&[record(day(6), "A", 60)]);
        assert_eq!(
            summary.headers(),
            vec![
                "PROJECTS",
                "MAR 4",
                "MAR 5",
                "MAR 6",
                "MAR 7",
                "MAR 8",
                "MAR 9",
                "MAR 10",
                "TASK TOTAL\nHRS/WEEK"
            ]
        );
        assert_eq!(summary.week_start(), Some(day(4)));
        assert_eq!(summary.week_end(), Some(day(10)));
    }

    #[test]
    fn headers_follow_month_changes() {
        let thu = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let headers = WeeklySummary::build(&[record(thu, "A", 60)]).headers();
        assert_eq!(headers[1], "FEB 26");
        assert_eq!(headers[4], "FEB 29");
        assert_eq!(headers[5], "MAR 1");
        assert_eq!(headers[7], "MAR 3");
    }

    #[test]
    fn activities_sorted_and_accumulated() {
        let records = vec![
            record(day(5), "Solution Documentation", 600),
            record(day(5), "Internal Meetings", 1200),
            record(day(5), "Solution Documentation", 900),
        ];
        let summary = WeeklySummary::build(&records);
        let names: Vec<_> = summary.activities().iter().map(|a| a.activity.as_str()).collect();
        assert_eq!(names, vec!["Internal Meetings", "Solution Documentation"]);
        assert_eq!(summary.activities()[1].daily[1], 1500);
        assert_eq!(summary.daily_totals()[1], 2700);
        assert_eq!(summary.grand_total(), 2700);
    }

    #[test]
    fn zero_duration_record_is_kept() {
        let summary = WeeklySummary::build(&[record(day(4), "Proposal Support", 0)]);
        let rows = summary.rows();
        assert_eq!(rows[0][1], "0h 0m");
        assert_eq!(rows[2][0], "Proposal Support");
        assert_eq!(rows[2][1], "0:00");
        assert_eq!(rows[2][8], "0:00");
        assert_eq!(rows[4][8], "0:00");
    }

    #[test]
    fn records_outside_window_are_skipped() {
        let records = vec![
            record(day(4), "A", 3600),
            record(day(12), "B", 3600),
        ];
        let summary = WeeklySummary::build(&records);
        assert_eq!(summary.activities().len(), 1);
        assert_eq!(summary.grand_total(), 3600);
    }

    #[test]
    fn minutes_truncate_in_totals() {
        let records = vec![
            record(day(4), "A", 59),
            record(day(5), "A", 59),
        ];
        let rows = WeeklySummary::build(&records).rows();
        assert_eq!(rows[2][1], "0:00");
        assert_eq!(rows[2][8], "0:01");
    }

    #[test]
    fn build_is_repeatable() {
        let records = vec![record(day(4), "A", 3600), record(day(9), "B", 120)];
        assert_eq!(WeeklySummary::build(&records), WeeklySummary::build(&records));
    }
}
