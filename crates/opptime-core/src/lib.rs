//! # opptime Core Library
//!
//! Core business logic for the opportunity time tracker: a user picks a deal
//! and an activity, runs a start/pause/stop timer against that pairing, and
//! every completed interval becomes a time-log record that can later be
//! exported as a detailed log plus a weekly timesheet.
//!
//! ## Architecture
//!
//! - **Timer Session**: A wall-clock-based state machine; the caller polls
//!   `tick()` for the display
//! - **Time Log Store**: Append-only record list over a load/save port
//!   (JSON document on disk by default)
//! - **Export**: Period filter, weekly timesheet builder and CSV/XLSX writers
//! - **Tracker**: The context object that wires the pieces together
//!
//! ## Key Components
//!
//! - [`TimerSession`]: Core timer state machine
//! - [`TimeLogStore`]: Record persistence
//! - [`WeeklySummary`]: Weekday × activity timesheet
//! - [`Config`]: Application configuration management

pub mod activity;
pub mod directory;
pub mod error;
pub mod events;
pub mod export;
pub mod format;
pub mod record;
pub mod storage;
pub mod timer;
pub mod tracker;

pub use directory::{InMemoryDirectory, Opportunity, OpportunityDirectory};
pub use error::{ConfigError, CoreError, ExportError, StorageError, TimerError, ValidationError};
pub use events::Event;
pub use export::{
    select_period, week_bounds, ExportFormat, ExportOutcome, ExportRequest, Period, WeeklySummary,
};
pub use record::TimeLogRecord;
pub use storage::{Config, JsonFilePersistence, LogPersistence, MemoryPersistence, TimeLogStore};
pub use timer::{Selection, TickToken, TimerSession, TimerState};
pub use tracker::{Stopped, Tracker};
