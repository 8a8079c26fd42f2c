//! Recorded room video playback panel

mod controller;
mod media;

pub use controller::{PlayAffordance, PlaybackController, PlaybackSurface};
pub use media::{MediaElement, SimulatedMedia};
