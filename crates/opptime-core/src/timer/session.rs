//! Timer session state machine.
//!
//! A wall-clock-based state machine tracking one timed interval against an
//! opportunity/activity pairing. There is no internal thread: the display
//! layer polls [`TimerSession::tick`] on its own schedule.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> (stop) -> Idle
//! ```
//!
//! The episode start is fixed at the first `start`; pausing freezes the
//! displayed elapsed value but does not remove the paused span from the
//! duration computed at `stop`.
//!
//! Every command has an `*_at` form taking the current local time so the
//! transitions can be driven deterministically.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::activity::DEFAULT_ROLE;
use crate::directory::{Opportunity, OpportunityDirectory};
use crate::error::{TimerError, ValidationError};
use crate::events::Event;
use crate::format::format_hms;
use crate::record::TimeLogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// What the running interval is booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub opportunity_id: String,
    pub activity: String,
    pub role: String,
    #[serde(default)]
    pub comment: String,
}

impl Selection {
    pub fn new(opportunity_id: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            opportunity_id: opportunity_id.into(),
            activity: activity.into(),
            role: DEFAULT_ROLE.to_string(),
            comment: String::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Opportunity and activity are required; role and comment are not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.opportunity_id.trim().is_empty() {
            return Err(ValidationError::missing(
                "opportunity",
                "please select an opportunity",
            ));
        }
        if self.activity.trim().is_empty() {
            return Err(ValidationError::missing(
                "activity",
                "please select an activity type",
            ));
        }
        Ok(())
    }
}

/// Ticket for one periodic display callback.
///
/// A token is bound to the tick generation it was issued in. `pause` and
/// `stop` advance the generation before touching any other state, so a
/// callback still holding an older token reads nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickToken {
    generation: u64,
}

/// Single timer session, created once per process and reused after every stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSession {
    state: TimerState,
    /// Start of the current episode; kept across pause/resume.
    #[serde(default)]
    started_at: Option<DateTime<Local>>,
    #[serde(default)]
    selection: Option<Selection>,
    /// Elapsed value shown while paused.
    #[serde(default)]
    paused_elapsed_secs: Option<u64>,
    #[serde(default)]
    tick_generation: u64,
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSession {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            started_at: None,
            selection: None,
            paused_elapsed_secs: None,
            tick_generation: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// Seconds shown on the display: live while running, frozen while paused.
    pub fn elapsed_at(&self, now: DateTime<Local>) -> u64 {
        match self.state {
            TimerState::Running => self.tick_at(now).unwrap_or(0),
            TimerState::Paused => self.paused_elapsed_secs.unwrap_or(0),
            TimerState::Idle => 0,
        }
    }

    pub fn snapshot(&self) -> Event {
        self.snapshot_at(Local::now())
    }

    pub fn snapshot_at(&self, now: DateTime<Local>) -> Event {
        let elapsed_secs = self.elapsed_at(now);
        Event::StateSnapshot {
            state: self.state,
            elapsed_secs,
            elapsed_display: format_hms(elapsed_secs),
            selection: self.selection.clone(),
            at: now,
        }
    }

    /// Elapsed seconds since the episode start. `None` unless running.
    pub fn tick(&self) -> Option<u64> {
        self.tick_at(Local::now())
    }

    pub fn tick_at(&self, now: DateTime<Local>) -> Option<u64> {
        match (self.state, self.started_at) {
            (TimerState::Running, Some(start)) => Some(seconds_between(start, now)),
            _ => None,
        }
    }

    /// Issue a token for the next scheduled tick. `None` unless running.
    pub fn tick_token(&self) -> Option<TickToken> {
        (self.state == TimerState::Running).then_some(TickToken {
            generation: self.tick_generation,
        })
    }

    /// Like [`tick_at`](Self::tick_at), but reads nothing for a stale token.
    pub fn tick_with_at(&self, token: &TickToken, now: DateTime<Local>) -> Option<u64> {
        if token.generation != self.tick_generation {
            return None;
        }
        self.tick_at(now)
    }

    pub fn is_token_live(&self, token: &TickToken) -> bool {
        self.state == TimerState::Running && token.generation == self.tick_generation
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self, selection: Selection) -> Result<Option<Event>, TimerError> {
        self.start_at(selection, Local::now())
    }

    /// Start a new episode.
    ///
    /// Already running is a no-op (`Ok(None)`). From `Paused` this resumes
    /// the existing episode and keeps the selection it was started with.
    pub fn start_at(
        &mut self,
        selection: Selection,
        now: DateTime<Local>,
    ) -> Result<Option<Event>, TimerError> {
        match self.state {
            TimerState::Running => Ok(None),
            TimerState::Paused => {
                selection.validate()?;
                self.resume_at(now).map(Some)
            }
            TimerState::Idle => {
                selection.validate()?;
                tracing::debug!(
                    opportunity = %selection.opportunity_id,
                    activity = %selection.activity,
                    "timer started"
                );
                let event = Event::TimerStarted {
                    opportunity_id: selection.opportunity_id.clone(),
                    activity: selection.activity.clone(),
                    at: now,
                };
                self.state = TimerState::Running;
                self.started_at = Some(now);
                self.selection = Some(selection);
                self.paused_elapsed_secs = None;
                Ok(Some(event))
            }
        }
    }

    pub fn pause(&mut self) -> Result<Event, TimerError> {
        self.pause_at(Local::now())
    }

    pub fn pause_at(&mut self, now: DateTime<Local>) -> Result<Event, TimerError> {
        if self.state != TimerState::Running {
            return Err(self.invalid("pause"));
        }
        self.tick_generation += 1;
        let elapsed_secs = self.tick_at(now).unwrap_or(0);
        self.state = TimerState::Paused;
        self.paused_elapsed_secs = Some(elapsed_secs);
        tracing::debug!(elapsed_secs, "timer paused");
        Ok(Event::TimerPaused { elapsed_secs, at: now })
    }

    pub fn resume(&mut self) -> Result<Event, TimerError> {
        self.resume_at(Local::now())
    }

    pub fn resume_at(&mut self, now: DateTime<Local>) -> Result<Event, TimerError> {
        if self.state != TimerState::Paused {
            return Err(self.invalid("resume"));
        }
        self.state = TimerState::Running;
        self.paused_elapsed_secs = None;
        let elapsed_secs = self.tick_at(now).unwrap_or(0);
        tracing::debug!(elapsed_secs, "timer resumed");
        Ok(Event::TimerResumed { elapsed_secs, at: now })
    }

    pub fn stop(
        &mut self,
        directory: &dyn OpportunityDirectory,
    ) -> Result<TimeLogRecord, TimerError> {
        self.stop_at(directory, Local::now())
    }

    /// Finish the episode and produce its record.
    ///
    /// An id missing from the directory still yields a record, with
    /// placeholder deal details.
    pub fn stop_at(
        &mut self,
        directory: &dyn OpportunityDirectory,
        now: DateTime<Local>,
    ) -> Result<TimeLogRecord, TimerError> {
        let (start, selection) = match (self.state, self.started_at, self.selection.as_ref()) {
            (TimerState::Running | TimerState::Paused, Some(start), Some(selection)) => {
                (start, selection.clone())
            }
            _ => return Err(self.invalid("stop")),
        };

        let opportunity = directory
            .lookup(&selection.opportunity_id)
            .unwrap_or_else(|| {
                tracing::warn!(
                    record_id = %selection.opportunity_id,
                    "opportunity not found in directory, recording placeholders"
                );
                Opportunity::unknown(&selection.opportunity_id)
            });

        let record = TimeLogRecord {
            date: now.date_naive(),
            timestamp: now.timestamp(),
            record_id: selection.opportunity_id,
            deal_name: opportunity.deal_name,
            company_name: opportunity.company_name,
            deal_owner: opportunity.deal_owner,
            role: selection.role,
            activity: selection.activity,
            comment: selection.comment,
            start_time: start.format("%H:%M:%S").to_string(),
            end_time: now.format("%H:%M:%S").to_string(),
            duration_seconds: seconds_between(start, now),
        };

        // Invalidate outstanding ticks before clearing the session.
        self.tick_generation += 1;
        self.state = TimerState::Idle;
        self.started_at = None;
        self.selection = None;
        self.paused_elapsed_secs = None;

        Ok(record)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn invalid(&self, action: &'static str) -> TimerError {
        TimerError::InvalidTransition {
            from: self.state,
            action,
        }
    }
}

/// Whole seconds from `start` to `end`, truncated, never negative.
fn seconds_between(start: DateTime<Local>, end: DateTime<Local>) -> u64 {
    u64::try_from((end - start).num_seconds()).unwrap_or(0)
}
