//! Application context.
//!
//! [`Tracker`] owns the one timer session, the one log store and the
//! opportunity directory. Front ends construct it once and issue every
//! command through it; nothing in the core is global.

use chrono::{DateTime, Local};

use crate::directory::OpportunityDirectory;
use crate::error::{ExportError, StorageError, TimerError};
use crate::events::Event;
use crate::export::{self, ExportOutcome, ExportRequest};
use crate::record::TimeLogRecord;
use crate::storage::{LogPersistence, TimeLogStore};
use crate::timer::{Selection, TimerSession};

/// Result of stopping the timer.
#[derive(Debug)]
pub struct Stopped {
    pub record: TimeLogRecord,
    /// `TimerStopped` for the record.
    pub event: Event,
    /// Set when the record could not be persisted. It is still in the store.
    pub save_error: Option<StorageError>,
}

pub struct Tracker<P: LogPersistence, D: OpportunityDirectory> {
    session: TimerSession,
    store: TimeLogStore<P>,
    directory: D,
}

impl<P: LogPersistence, D: OpportunityDirectory> Tracker<P, D> {
    pub fn new(session: TimerSession, store: TimeLogStore<P>, directory: D) -> Self {
        Self {
            session,
            store,
            directory,
        }
    }

    pub fn session(&self) -> &TimerSession {
        &self.session
    }

    pub fn store(&self) -> &TimeLogStore<P> {
        &self.store
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn log_count(&self) -> usize {
        self.store.len()
    }

    pub fn start(&mut self, selection: Selection) -> Result<Option<Event>, TimerError> {
        self.session.start(selection)
    }

    pub fn start_at(
        &mut self,
        selection: Selection,
        now: DateTime<Local>,
    ) -> Result<Option<Event>, TimerError> {
        self.session.start_at(selection, now)
    }

    pub fn pause(&mut self) -> Result<Event, TimerError> {
        self.session.pause()
    }

    pub fn pause_at(&mut self, now: DateTime<Local>) -> Result<Event, TimerError> {
        self.session.pause_at(now)
    }

    pub fn resume(&mut self) -> Result<Event, TimerError> {
        self.session.resume()
    }

    pub fn resume_at(&mut self, now: DateTime<Local>) -> Result<Event, TimerError> {
        self.session.resume_at(now)
    }

    pub fn stop(&mut self) -> Result<Stopped, TimerError> {
        self.stop_at(Local::now())
    }

    /// Stop the timer and append the resulting record to the store.
    pub fn stop_at(&mut self, now: DateTime<Local>) -> Result<Stopped, TimerError> {
        let record = self.session.stop_at(&self.directory, now)?;
        tracing::info!(
            record_id = %record.record_id,
            activity = %record.activity,
            duration_secs = record.duration_seconds,
            "time logged"
        );
        let event = Event::TimerStopped {
            record_id: record.record_id.clone(),
            activity: record.activity.clone(),
            duration_secs: record.duration_seconds,
            at: now,
        };
        let save_error = self.store.append(record.clone()).err();
        Ok(Stopped {
            record,
            event,
            save_error,
        })
    }

    pub fn export(&self, request: &ExportRequest) -> Result<ExportOutcome, ExportError> {
        export::export(self.store.all(), request)
    }
}
