use super::state::{transition, RecordingError, RecordingEvent, RecordingState, Transition};
use crate::format::format_clock;
use serde::Serialize;
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use uuid::Uuid;

/// Result of an accepted event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub transition: Transition,
    pub state: RecordingState,
    /// Elapsed seconds at the moment the event was applied (before any reset)
    pub elapsed_secs: u64,
    /// Session the event applied to
    pub session_id: Option<String>,
}

/// Point-in-time view of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordingSnapshot {
    pub session_id: Option<String>,
    pub state: RecordingState,
    pub elapsed_secs: u64,
}

/// A single recording session: lifecycle state, elapsed counter and the
/// tick timer that drives it.
///
/// At most one tick timer exists. It is created when the session enters
/// `Recording` and dropped on every transition out of it, so a tick can
/// never land one state late.
pub struct RecordingSession {
    id: Option<String>,
    state: RecordingState,
    elapsed_secs: u64,
    tick_period: Duration,
    tick: Option<Interval>,
}

impl RecordingSession {
    /// A zero `tick_period` is raised to one millisecond
    pub fn new(tick_period: Duration) -> Self {
        Self {
            id: None,
            state: RecordingState::Stopped,
            elapsed_secs: 0,
            tick_period: tick_period.max(Duration::from_millis(1)),
            tick: None,
        }
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn formatted_elapsed(&self) -> String {
        format_clock(self.elapsed_secs)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_ticking(&self) -> bool {
        self.tick.is_some()
    }

    pub fn snapshot(&self) -> RecordingSnapshot {
        RecordingSnapshot {
            session_id: self.id.clone(),
            state: self.state,
            elapsed_secs: self.elapsed_secs,
        }
    }

    /// Apply a user event. Rejected events leave the session untouched.
    ///
    /// Timer changes require a tokio runtime with the time driver enabled.
    pub fn apply(&mut self, event: RecordingEvent) -> Result<Outcome, RecordingError> {
        let transition = transition(self.state, event)?;
        let elapsed_secs = self.elapsed_secs;

        match transition {
            Transition::Started => {
                self.id = Some(format!("rec-{}", Uuid::new_v4()));
                self.elapsed_secs = 0;
                self.start_tick();
            }
            Transition::Paused => self.stop_tick(),
            Transition::Resumed => self.start_tick(),
            Transition::Checkpoint => {}
            Transition::Finished => self.stop_tick(),
        }

        let session_id = self.id.clone();
        self.state = transition.target(self.state);

        if transition == Transition::Finished {
            self.elapsed_secs = 0;
            self.id = None;
        }

        Ok(Outcome {
            transition,
            state: self.state,
            elapsed_secs,
            session_id,
        })
    }

    /// Count one elapsed second. Ignored unless recording.
    pub fn tick(&mut self) -> u64 {
        if self.state == RecordingState::Recording {
            self.elapsed_secs += 1;
        }
        self.elapsed_secs
    }

    /// Wait for the next tick. Never resolves while no timer is running.
    pub async fn next_tick(&mut self) {
        match self.tick.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    fn start_tick(&mut self) {
        // Replacing the option drops any previous timer first
        self.stop_tick();
        let mut interval = interval_at(Instant::now() + self.tick_period, self.tick_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.tick = Some(interval);
    }

    fn stop_tick(&mut self) {
        self.tick = None;
    }
}
