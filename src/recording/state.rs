use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle of a recording session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingState {
    #[default]
    Stopped,
    Recording,
    Paused,
}

impl fmt::Display for RecordingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordingState::Stopped => "stopped",
            RecordingState::Recording => "recording",
            RecordingState::Paused => "paused",
        };
        f.write_str(name)
    }
}

/// User actions on the recording panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordingEvent {
    Start,
    /// Single control that pauses while recording and resumes while paused
    PauseResume,
    Save,
    Finish,
}

/// What the session must do as a consequence of an accepted event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Fresh start: reset elapsed time and start ticking
    Started,
    /// Tick cancelled, elapsed time kept
    Paused,
    /// Tick restarted, elapsed time continues
    Resumed,
    /// Checkpoint only, nothing changes
    Checkpoint,
    /// Tick cancelled, final duration emitted, session reset
    Finished,
}

impl Transition {
    /// State the session is in after this transition is applied
    pub fn target(self, from: RecordingState) -> RecordingState {
        match self {
            Transition::Started | Transition::Resumed => RecordingState::Recording,
            Transition::Paused => RecordingState::Paused,
            Transition::Checkpoint => from,
            Transition::Finished => RecordingState::Stopped,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordingError {
    #[error("cannot apply {event:?} while {state}")]
    InvalidTransition {
        state: RecordingState,
        event: RecordingEvent,
    },
}

/// Transition table for the recording lifecycle.
///
/// Pairs not listed here are rejected; the caller leaves the session as is.
pub fn transition(
    state: RecordingState,
    event: RecordingEvent,
) -> Result<Transition, RecordingError> {
    use RecordingEvent::*;
    use RecordingState::*;

    match (state, event) {
        (Stopped, Start) => Ok(Transition::Started),
        (Recording, PauseResume) => Ok(Transition::Paused),
        (Paused, PauseResume) => Ok(Transition::Resumed),
        (Recording | Paused, Save) => Ok(Transition::Checkpoint),
        (Recording | Paused, Finish) => Ok(Transition::Finished),
        (state, event) => Err(RecordingError::InvalidTransition { state, event }),
    }
}
