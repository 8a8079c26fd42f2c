//! Live camera recording panel
//!
//! This module provides:
//! - The recording lifecycle (stopped, recording, paused) as an explicit transition table
//! - `RecordingSession`, which owns the elapsed-time counter and its one-second tick
//! - `RecordingController`, which reflects every transition on the camera panel
//!   and keeps the wall clock refreshed

mod controller;
mod session;
mod state;
mod view;

pub use controller::{RecordingController, RecordingHandle};
pub use session::{Outcome, RecordingSession, RecordingSnapshot};
pub use state::{transition, RecordingError, RecordingEvent, RecordingState, Transition};
pub use view::{Framing, PauseAffordance, RecordingSurface, RecordingView};
