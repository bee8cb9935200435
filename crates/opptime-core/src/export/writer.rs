//! Export writers.
//!
//! Tables are built first and only then handed to a writer, so the
//! aggregation code never sees a file format.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};

use super::table::{Cell, Table};
use crate::error::ExportError;

/// Write one table as a CSV file with a header row.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), ExportError> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Write every table as a worksheet of one workbook, in order.
pub fn write_xlsx(tables: &[&Table], path: &Path) -> Result<(), ExportError> {
    ensure_parent(path)?;
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold().set_text_wrap();

    for table in tables {
        let sheet = workbook.add_worksheet();
        sheet.set_name(table.name())?;
        for (col, header) in table.headers().iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, header.as_str(), &header_format)?;
        }
        for (r, row) in table.rows().iter().enumerate() {
            let row_idx = r as u32 + 1;
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(s) => sheet.write_string(row_idx, col as u16, s.as_str())?,
                    Cell::Int(n) => sheet.write_number(row_idx, col as u16, *n as f64)?,
                };
            }
        }
        sheet.autofit();
    }

    workbook.save(path)?;
    Ok(())
}

/// `report.csv` -> `report_weekly_summary.csv`.
pub fn weekly_summary_path(detailed: &Path) -> PathBuf {
    let stem = match detailed.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => detailed.with_extension(""),
        _ => detailed.to_path_buf(),
    };
    let mut name = stem.into_os_string();
    name.push("_weekly_summary.csv");
    PathBuf::from(name)
}

fn ensure_parent(path: &Path) -> Result<(), ExportError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
