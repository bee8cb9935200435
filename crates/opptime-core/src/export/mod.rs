//! Time-log export.
//!
//! An export selects records for a period, builds the detailed-log table and
//! the weekly timesheet table, and hands both to a writer:
//!
//! - CSV: the detailed log at the chosen path, the timesheet beside it at
//!   `<path>_weekly_summary.csv`.
//! - XLSX: one workbook with `Detailed Logs` and `Weekly Timesheet` sheets.

mod filter;
mod summary;
mod table;
mod writer;

pub use filter::{select_period, week_bounds, Period};
pub use summary::{
    ActivityRow, WeeklySummary, ATTENDANCE_LABEL, COMMENT_LABEL, PROJECTS_HEADER,
    TASK_TOTAL_HEADER, TOTAL_LABEL,
};
pub use table::{
    detailed_log_table, Cell, Table, DETAILED_LOGS_SHEET, DETAILED_LOG_HEADERS,
    WEEKLY_TIMESHEET_SHEET,
};
pub use writer::{weekly_summary_path, write_csv, write_xlsx};

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::record::TimeLogRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// `time_logs_daily_<date>.<ext>` or
/// `time_logs_weekly_<monday>_to_<sunday>.<ext>`.
pub fn default_file_name(period: Period, reference: NaiveDate, format: ExportFormat) -> String {
    let stem = match period {
        Period::Daily => format!("daily_{}", reference.format("%Y-%m-%d")),
        Period::Weekly => {
            let (start, end) = week_bounds(reference);
            format!(
                "weekly_{}_to_{}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            )
        }
    };
    format!("time_logs_{stem}.{}", format.extension())
}

#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub period: Period,
    pub reference: NaiveDate,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportOutcome {
    /// The period holds no records; nothing was written.
    NothingToExport { period: Period, reference: NaiveDate },
    Written {
        record_count: usize,
        files: Vec<PathBuf>,
    },
}

/// Select, tabulate and write. The records slice is the full log.
pub fn export(
    records: &[TimeLogRecord],
    request: &ExportRequest,
) -> Result<ExportOutcome, ExportError> {
    let selected = select_period(records, request.period, request.reference);
    if selected.is_empty() {
        tracing::info!(period = ?request.period, reference = %request.reference, "nothing to export");
        return Ok(ExportOutcome::NothingToExport {
            period: request.period,
            reference: request.reference,
        });
    }

    let detailed = detailed_log_table(&selected);
    let timesheet = WeeklySummary::build(&selected).to_table();

    let files = match request.format {
        ExportFormat::Csv => {
            let summary_path = weekly_summary_path(&request.destination);
            write_csv(&detailed, &request.destination)?;
            write_csv(&timesheet, &summary_path)?;
            vec![request.destination.clone(), summary_path]
        }
        ExportFormat::Xlsx => {
            write_xlsx(&[&detailed, &timesheet], &request.destination)?;
            vec![request.destination.clone()]
        }
    };

    tracing::info!(
        records = selected.len(),
        format = request.format.extension(),
        destination = %request.destination.display(),
        "time logs exported"
    );
    Ok(ExportOutcome::Written {
        record_count: selected.len(),
        files,
    })
}
