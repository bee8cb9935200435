//! Load/save port for the time-log document.
//!
//! The whole ordered record list is read and written at once. The JSON
//! adapter stores it as a pretty-printed array using the record's camelCase
//! field names.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::record::TimeLogRecord;

pub trait LogPersistence {
    /// Read every stored record in insertion order.
    fn load(&self) -> Result<Vec<TimeLogRecord>, StorageError>;

    /// Replace the stored document with `records`.
    fn save(&self, records: &[TimeLogRecord]) -> Result<(), StorageError>;
}

/// JSON document on disk. A missing file loads as an empty list.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogPersistence for JsonFilePersistence {
    fn load(&self) -> Result<Vec<TimeLogRecord>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::LoadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, records: &[TimeLogRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(records)?;
        let save_failed = |source| StorageError::SaveFailed {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(save_failed)?;
        }
        // Write beside the target, then rename over it.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(save_failed)?;
        std::fs::rename(&tmp, &self.path).map_err(save_failed)
    }
}

/// In-process port for tests and embedding. Failures can be injected.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    records: RefCell<Vec<TimeLogRecord>>,
    fail_load: bool,
    fail_save: bool,
    saves: RefCell<usize>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<TimeLogRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            ..Self::default()
        }
    }

    pub fn failing_load() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    pub fn failing_save() -> Self {
        Self {
            fail_save: true,
            ..Self::default()
        }
    }

    /// Records as last saved.
    pub fn saved(&self) -> Vec<TimeLogRecord> {
        self.records.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl LogPersistence for MemoryPersistence {
    fn load(&self) -> Result<Vec<TimeLogRecord>, StorageError> {
        if self.fail_load {
            return Err(StorageError::Backend("load failure injected".into()));
        }
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[TimeLogRecord]) -> Result<(), StorageError> {
        *self.saves.borrow_mut() += 1;
        if self.fail_save {
            return Err(StorageError::Backend("save failure injected".into()));
        }
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
