//! Append-only time-log store.
//!
//! The in-memory list is authoritative for the running process. Every append
//! writes the whole list back through the persistence port; a failed write
//! is reported to the caller but never rolls back the append.

use crate::error::StorageError;
use crate::record::TimeLogRecord;

use super::persistence::LogPersistence;

pub struct TimeLogStore<P: LogPersistence> {
    port: P,
    records: Vec<TimeLogRecord>,
    load_warning: Option<String>,
}

impl<P: LogPersistence> TimeLogStore<P> {
    /// Load existing records through `port`.
    ///
    /// A load failure leaves the store empty and keeps the message in
    /// [`load_warning`](Self::load_warning).
    pub fn open(port: P) -> Self {
        let (records, load_warning) = match port.load() {
            Ok(records) => {
                tracing::debug!(count = records.len(), "time logs loaded");
                (records, None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load existing time logs, starting empty");
                (Vec::new(), Some(e.to_string()))
            }
        };
        Self {
            port,
            records,
            load_warning,
        }
    }

    /// Append and persist.
    ///
    /// # Errors
    /// Returns the save failure. The record stays in memory either way.
    pub fn append(&mut self, record: TimeLogRecord) -> Result<(), StorageError> {
        self.records.push(record);
        self.port.save(&self.records).map_err(|e| {
            tracing::warn!(error = %e, count = self.records.len(), "failed to save time logs");
            e
        })
    }

    pub fn all(&self) -> &[TimeLogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn port(&self) -> &P {
        &self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::persistence::MemoryPersistence;
    use chrono::NaiveDate;

    fn record(n: u64) -> TimeLogRecord {
        TimeLogRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            timestamp: 1_709_550_000 + n as i64,
            record_id: format!("R{n}"),
            deal_name: "Deal".into(),
            company_name: "Acme".into(),
            deal_owner: "Dana".into(),
            role: "Pre-Sales".into(),
            activity: "Proposal Support".into(),
            comment: String::new(),
            start_time: "09:00:00".into(),
            end_time: "09:01:00".into(),
            duration_seconds: n,
        }
    }

    #[test]
    fn open_loads_existing_records() {
        let store = TimeLogStore::open(MemoryPersistence::with_records(vec![record(1), record(2)]));
        assert_eq!(store.len(), 2);
        assert!(store.load_warning().is_none());
    }

    #[test]
    fn load_failure_yields_empty_store_with_warning() {
        let store = TimeLogStore::open(MemoryPersistence::failing_load());
        assert!(store.is_empty());
        assert!(store.load_warning().unwrap().contains("load failure"));
    }

    #[test]
    fn append_grows_by_one_and_keeps_order() {
        let mut store = TimeLogStore::open(MemoryPersistence::with_records(vec![record(1), record(2)]));
        store.append(record(3)).unwrap();
        let ids: Vec<_> = store.all().iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(ids, vec!["R1", "R2", "R3"]);
        assert_eq!(store.port().saved().len(), 3);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut store = TimeLogStore::open(MemoryPersistence::new());
        store.append(record(5)).unwrap();
        store.append(record(5)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn save_failure_keeps_record_in_memory() {
        let mut store = TimeLogStore::open(MemoryPersistence::failing_save());
        assert!(store.append(record(1)).is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.port().save_count(), 1);
        assert!(store.append(record(2)).is_err());
        assert_eq!(store.len(), 2);
        assert_eq!(store.port().save_count(), 2);
    }
}
