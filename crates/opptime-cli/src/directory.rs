//! CSV-backed opportunity directory.
//!
//! Expects a header row with `Record Id`, `Deal Name`, `Company Name` and
//! `Deal Owner`. CRM exports that label the company column
//! `Company Name (Company Name)` are accepted as-is.

use std::path::Path;

use opptime_core::{InMemoryDirectory, Opportunity};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DirectoryRow {
    #[serde(rename = "Record Id")]
    record_id: String,
    #[serde(rename = "Deal Name")]
    deal_name: String,
    #[serde(rename = "Company Name", alias = "Company Name (Company Name)")]
    company_name: String,
    #[serde(rename = "Deal Owner")]
    deal_owner: String,
}

/// Read the directory file. A missing file is an empty directory.
pub fn load(path: &Path) -> Result<InMemoryDirectory, Box<dyn std::error::Error>> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "opportunity directory not found, ids will resolve to placeholders");
        return Ok(InMemoryDirectory::new());
    }
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut directory = InMemoryDirectory::new();
    for (line, row) in reader.deserialize::<DirectoryRow>().enumerate() {
        let row = row.map_err(|e| format!("{}: row {}: {e}", path.display(), line + 1))?;
        if row.record_id.is_empty() {
            tracing::warn!(row = line + 1, "skipping opportunity without record id");
            continue;
        }
        directory.insert(Opportunity {
            record_id: row.record_id,
            deal_name: row.deal_name,
            company_name: row.company_name,
            deal_owner: row.deal_owner,
        });
    }
    Ok(directory)
}
