use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::timer::{Selection, TimerState};

/// Every timer state change produces an Event.
/// Front ends render them; the CLI prints them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        opportunity_id: String,
        activity: String,
        at: DateTime<Local>,
    },
    TimerPaused {
        elapsed_secs: u64,
        at: DateTime<Local>,
    },
    TimerResumed {
        elapsed_secs: u64,
        at: DateTime<Local>,
    },
    TimerStopped {
        record_id: String,
        activity: String,
        duration_secs: u64,
        at: DateTime<Local>,
    },
    /// Full state snapshot.
    StateSnapshot {
        state: TimerState,
        /// Seconds since the episode started; frozen while paused.
        elapsed_secs: u64,
        elapsed_display: String,
        selection: Option<Selection>,
        at: DateTime<Local>,
    },
}
