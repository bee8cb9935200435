//! Per-invocation application context.
//!
//! Each CLI run rebuilds the tracker from disk: configuration, the saved
//! timer session, the time-log document and the opportunity directory.
//! Commands that change the session write it back with [`Context::save_session`].

use std::path::{Path, PathBuf};

use opptime_core::storage::data_dir;
use opptime_core::{
    Config, InMemoryDirectory, JsonFilePersistence, TimeLogStore, TimerSession, Tracker,
};

pub const SESSION_FILE: &str = "session.json";

pub struct Context {
    pub config: Config,
    pub tracker: Tracker<JsonFilePersistence, InMemoryDirectory>,
    session_path: PathBuf,
}

impl Context {
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load_or_default();
        let session_path = session_path()?;
        let session = load_session(&session_path);

        let log_path = config.resolve_file(&config.storage.log_file)?;
        let store = TimeLogStore::open(JsonFilePersistence::new(log_path));
        if let Some(warning) = store.load_warning() {
            eprintln!("warning: failed to load existing time logs: {warning}");
        }

        let directory_path = config.resolve_file(&config.storage.directory_file)?;
        let directory = crate::directory::load(&directory_path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "opportunity directory unreadable, ids will resolve to placeholders");
            eprintln!("warning: failed to load opportunity directory: {e}");
            InMemoryDirectory::new()
        });

        Ok(Self {
            config,
            tracker: Tracker::new(session, store, directory),
            session_path,
        })
    }

    pub fn save_session(&self) -> Result<(), Box<dyn std::error::Error>> {
        write_session(&self.session_path, self.tracker.session())
    }
}

/// Replace the saved session. Readers see either the old or the new file.
pub fn write_session(
    path: &Path,
    session: &TimerSession,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(session)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

pub fn session_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(data_dir()?.join(SESSION_FILE))
}

/// Saved session, or a fresh idle one if there is none or it is unreadable.
pub fn load_session(path: &Path) -> TimerSession {
    let Ok(json) = std::fs::read_to_string(path) else {
        return TimerSession::new();
    };
    serde_json::from_str(&json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "discarding unreadable timer session");
        TimerSession::new()
    })
}
